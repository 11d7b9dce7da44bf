//! Leptos Viewport Utilities
//!
//! Window scroll/resize subscriptions, smooth scrolling, reveal-on-enter and
//! cancellable timers. Every listener is tied to the calling component's
//! owner and removed on unmount.

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod reveal;
mod timer;

pub use reveal::{observe_once, OnceObserver, Reveal};
pub use timer::{use_interval, use_timeout};

/// One reading of the window's scroll position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

/// Read the current scroll position; zeros outside a browser
pub fn read_scroll() -> ScrollSample {
    let Some(win) = web_sys::window() else {
        return ScrollSample::default();
    };
    ScrollSample {
        scroll_y: win.scroll_y().unwrap_or(0.0),
        viewport_height: win.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0),
    }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Subscribe to scroll samples, at most one per animation frame
///
/// Fires once immediately so derived state is right on load.
pub fn use_scroll<F>(on_sample: F)
where
    F: Fn(ScrollSample) + 'static,
{
    let on_sample = Rc::new(on_sample);
    on_sample(read_scroll());

    let frame_pending = Rc::new(Cell::new(false));
    let handle = window_event_listener(ev::scroll, move |_| {
        if frame_pending.replace(true) {
            return;
        }
        let frame_pending = Rc::clone(&frame_pending);
        let on_sample = Rc::clone(&on_sample);
        request_animation_frame(move || {
            frame_pending.set(false);
            on_sample(read_scroll());
        });
    });
    on_cleanup(move || handle.remove());
}

/// Window inner width, kept current through `resize`
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(viewport_width());
    let handle = window_event_listener(ev::resize, move |_| {
        set_width.set(viewport_width());
    });
    on_cleanup(move || handle.remove());
    width
}

/// (offset top, offset height) of the element with this id
pub fn element_extent(id: &str) -> Option<(f64, f64)> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some((f64::from(element.offset_top()), f64::from(element.offset_height())))
}

/// Smooth-scroll to an element; no-op when the id is absent
pub fn scroll_to_id(id: &str) -> bool {
    let target = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("[Viewport] no element #{} to scroll to", id);
            false
        }
    }
}
