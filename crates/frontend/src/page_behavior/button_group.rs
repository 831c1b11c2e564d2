//! Exclusive "checked" marker inside filter button groups.

use crate::shared::dom::{select_all, select_all_in};
use contracts::page_behavior::stale_checks;
use contracts::shared::config::PageBehaviorConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

pub fn install(config: &PageBehaviorConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    for group in select_all(&document, &config.button_group_selector) {
        install_group(group, config);
    }
}

/// One delegated listener per group; the marked buttons are read from the
/// DOM on every click, so buttons added later are covered too.
fn install_group(group: Element, config: &PageBehaviorConfig) {
    let button_selector = config.button_selector.clone();
    let checked_class = config.checked_class.clone();
    let checked_selector = format!(".{}", config.checked_class);
    let listener_group = group.clone();

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(button)) = target.closest(&button_selector) else {
            return;
        };
        let button_node: &Node = &button;
        if !listener_group.contains(Some(button_node)) {
            return;
        }

        let marked = select_all_in(&listener_group, &checked_selector);
        for stale in stale_checks(&marked, &button) {
            let _ = stale.class_list().remove_1(&checked_class);
        }
        let _ = button.class_list().add_1(&checked_class);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let _ = group.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
