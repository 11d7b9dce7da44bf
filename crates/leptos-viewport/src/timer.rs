//! Owner-scoped timers
//!
//! Dropping a gloo timer cancels it, so each timer lives in a local stored
//! value that is emptied on cleanup.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

/// Run `on_tick` every `period_ms` while `active` is true
///
/// The interval is created when `active` turns on and cancelled when it
/// turns off or the owner is disposed. Pass a memo so that unrelated updates
/// to the source state do not restart the interval.
pub fn use_interval<F>(period_ms: u32, active: Signal<bool>, on_tick: F)
where
    F: Fn() + 'static,
{
    let on_tick = Rc::new(on_tick);
    let slot = StoredValue::new_local(None::<Interval>);

    Effect::new(move |_| {
        if active.get() {
            let on_tick = Rc::clone(&on_tick);
            slot.set_value(Some(Interval::new(period_ms, move || on_tick())));
        } else {
            slot.set_value(None);
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|interval| interval.take());
    });
}

/// Run `on_fire` once after `delay_ms`, unless the owner goes away first
pub fn use_timeout<F>(delay_ms: u32, on_fire: F)
where
    F: FnOnce() + 'static,
{
    let slot = StoredValue::new_local(Some(Timeout::new(delay_ms, on_fire)));
    on_cleanup(move || {
        slot.try_update_value(|timeout| timeout.take());
    });
}
