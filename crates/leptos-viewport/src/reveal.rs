//! Reveal on first intersection

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible before it counts
const REVEAL_THRESHOLD: f64 = 0.15;

/// An observer that disconnects when dropped
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_enter` the first time `element` intersects the viewport
///
/// Returns `None` if the browser cannot build an observer; the caller should
/// then treat the element as already visible.
pub fn observe_once<F>(element: &web_sys::Element, threshold: f64, on_enter: F) -> Option<OnceObserver>
where
    F: FnOnce() + 'static,
{
    let mut on_enter = Some(on_enter);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if entered {
                observer.disconnect();
                if let Some(on_enter) = on_enter.take() {
                    on_enter();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some(OnceObserver {
        observer,
        _callback: callback,
    })
}

/// Wrapper that adds `revealed` to its class list once scrolled into view
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Stagger, applied as a CSS transition delay
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<OnceObserver>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else { return };
        if revealed.get_untracked() {
            return;
        }
        match observe_once(&element, REVEAL_THRESHOLD, move || set_revealed.set(true)) {
            Some(active) => observer.set_value(Some(active)),
            None => set_revealed.set(true),
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| slot.take());
    });

    let class_list = move || {
        if revealed.get() {
            format!("reveal revealed {}", class)
        } else {
            format!("reveal {}", class)
        }
    };

    view! {
        <div node_ref=node_ref class=class_list style=format!("transition-delay: {}ms", delay_ms)>
            {children()}
        </div>
    }
}
