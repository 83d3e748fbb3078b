//! One-shot scroll reveal.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, Hooks};
use crate::error::Result;
use crate::reveal::{REVEAL_CLASS, RevealMode};
use crate::state::AppState;

pub fn bind(state: &AppState, hooks: &Hooks) -> Result<()> {
    let supported =
        js_sys::Reflect::has(&hooks.window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);

    match RevealMode::plan(hooks.reveals.len(), supported, state.config().reveal_threshold) {
        RevealMode::Idle => Ok(()),
        RevealMode::ShowAll => {
            tracing::debug!("IntersectionObserver unsupported, revealing everything");
            for el in &hooks.reveals {
                dom::set_class(el, REVEAL_CLASS, true);
            }
            Ok(())
        }
        RevealMode::Observe { threshold } => observe(&hooks.reveals, threshold),
    }
}

fn observe(elements: &[web_sys::Element], threshold: f64) -> Result<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, REVEAL_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in elements {
        observer.observe(el);
    }

    Ok(())
}
