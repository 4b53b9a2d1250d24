use super::{dispatch, InputWiring};
use crate::dom;
use julia_core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hash changes drive locks; losing pointer lock mid-drag falls back to
/// absolute tracking.
pub fn wire_navigation(w: &InputWiring) {
    if let Some(window) = web::window() {
        let w_hash = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::HashChangeEvent| {
                dispatch(
                    &w_hash,
                    InputEvent::Navigate {
                        fragment: dom::read_fragment(),
                    },
                );
            }) as Box<dyn FnMut(_)>);
        _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(document) = dom::window_document() {
        let w_lock = w.clone();
        let doc = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
            if doc.pointer_lock_element().is_none() {
                dispatch(&w_lock, InputEvent::RelativeMotionLost);
            }
        }) as Box<dyn FnMut(_)>);
        _ = document
            .add_event_listener_with_callback("pointerlockchange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Shared links open locked: treat the fragment present at load as a
/// navigation.
pub fn restore_from_fragment(w: &InputWiring) {
    let fragment = dom::read_fragment();
    if !fragment.is_empty() {
        log::info!("[url] restoring from #{}", fragment);
    }
    dispatch(w, InputEvent::Navigate { fragment });
}
