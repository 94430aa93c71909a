//! Scroll reveal through an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use vet_site::reveal::{REVEAL_CLASS, REVEAL_SELECTORS};
use vet_site::{RevealOptions, RevealTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::WebResult;

/// Attribute holding a target's index in the observed list.
const KEY_ATTR: &str = "data-reveal";

/// Observe every revealable element of the document.
///
/// The returned observer must be kept alive for as long as the page runs.
pub fn observe(document: &Document, options: &RevealOptions) -> WebResult<IntersectionObserver> {
    let targets = dom::elements(document.query_selector_all(REVEAL_SELECTORS)?);
    for (i, target) in targets.iter().enumerate() {
        target.set_attribute(KEY_ATTR, &i.to_string())?;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new()));
    let observed = targets.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let batch: Vec<(usize, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| key_of(&entry.target()).map(|key| (key, entry.is_intersecting())))
                .collect();

            for key in tracker.borrow_mut().observe(batch) {
                if let Some(target) = observed.get(key) {
                    if let Err(e) = target.class_list().add_1(REVEAL_CLASS) {
                        log::warn!("cannot reveal element {}: {:?}", key, e);
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(observer)
}

fn key_of(element: &Element) -> Option<usize> {
    element.get_attribute(KEY_ATTR)?.parse().ok()
}
