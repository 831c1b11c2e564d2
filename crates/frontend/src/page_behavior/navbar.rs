use crate::shared::dom::select_all;
use contracts::page_behavior::navbar_is_fixed;
use contracts::shared::config::PageBehaviorConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Pins the navbar (adds the fixed class) once the page is scrolled past
/// the threshold.
pub fn install(config: &PageBehaviorConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let config = config.clone();
    update_navbar(&config);

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        update_navbar(&config);
    }) as Box<dyn FnMut(_)>);

    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn update_navbar(config: &PageBehaviorConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let fixed = navbar_is_fixed(scroll_top, config.scroll_threshold);
    for navbar in select_all(&document, &config.navbar_selector) {
        let _ = navbar
            .class_list()
            .toggle_with_force(&config.fixed_class, fixed);
    }
}
