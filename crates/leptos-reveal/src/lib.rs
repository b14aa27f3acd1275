//! Leptos Reveal Utilities
//!
//! Scroll-reveal for Leptos using `IntersectionObserver`.
//! An element gets the visible class the first time it enters the viewport
//! and is never observed again, so the effect plays once per page load.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible before it is revealed
pub const DEFAULT_THRESHOLD: f64 = 0.12;

/// Class added to revealed elements
pub const VISIBLE_CLASS: &str = "in";

/// Create an observer that marks intersecting targets and stops watching them
fn make_observer(visible_class: &'static str, threshold: f64) -> Option<IntersectionObserver> {
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(visible_class);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            // The observer lives for the whole page, so the callback does too
            on_intersect.forget();
            Some(observer)
        }
        Err(err) => {
            log::debug!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

/// Watch a single element
pub fn observe_element(element: &Element, visible_class: &'static str, threshold: f64) {
    if let Some(observer) = make_observer(visible_class, threshold) {
        observer.observe(element);
    }
}

/// Watch every element matching `selector` with one shared observer.
/// Returns how many elements are being watched.
pub fn observe_reveal(selector: &str, visible_class: &'static str, threshold: f64) -> u32 {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        log::warn!("invalid reveal selector: {}", selector);
        return 0;
    };
    let Some(observer) = make_observer(visible_class, threshold) else {
        return 0;
    };

    let mut watched = 0;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
            watched += 1;
        }
    }
    watched
}

/// Section that fades in the first time it scrolls into view
#[component]
pub fn Reveal(
    /// Extra classes besides `reveal`
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();

    Effect::new(move |_| {
        if let Some(el) = node.get() {
            observe_element(&el, VISIBLE_CLASS, DEFAULT_THRESHOLD);
        }
    });

    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {}", class)
    };

    view! {
        <section class=class node_ref=node>
            {children()}
        </section>
    }
}
