//! Document lifecycle hooks.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Run `f` once the document structure is parsed.
///
/// Fires on `DOMContentLoaded`, or right away when the document is already
/// past the `loading` state (the script was loaded late or deferred).
pub fn on_document_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available, page behaviors not started");
        return;
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut(_)>);

    let _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once every resource of the page has loaded (window `load`).
pub fn on_window_load<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };

    let complete = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        f();
        return;
    }

    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut(_)>);

    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
