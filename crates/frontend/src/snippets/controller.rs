//! Snippet tab controller for server-rendered page markup.
//!
//! `initialize` turns every snippet group on the page into a tabbed group;
//! one delegated click listener on the document handles every tab strip.
//! Selection state lives in a [`SnippetPage`]; the DOM only mirrors it.

use super::render::{build_element, insert_before};
use super::scanner::scan_groups;
use crate::shared::dom::set_visible;
use contracts::shared::config::SnippetsConfig;
use contracts::snippets::{
    tab_strip_spec, GroupId, LanguageId, SelectionChanged, SnippetPage, TabSelected,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Element};

struct GroupElements {
    group: Element,
    variants: Vec<Element>,
}

struct SnippetController {
    config: SnippetsConfig,
    page: SnippetPage,
    /// Indexed by `GroupId`.
    elements: Vec<GroupElements>,
    listening: bool,
}

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<RefCell<SnippetController>>>> = const { RefCell::new(None) };
}

/// Initialize snippet tabs on the current document.
///
/// Safe to call again after new markup was added: groups that already have
/// a tab strip are left alone and the click listener is installed once.
/// The configuration of the first call stays in effect for the page, since
/// existing tab strips were built from it.
pub fn initialize(config: &SnippetsConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("snippet tabs: no document");
        return;
    };

    let controller = CONTROLLER.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| Rc::new(RefCell::new(SnippetController::new(config.clone()))))
            .clone()
    });

    if !controller.borrow().uses_config(config) {
        log::warn!("snippet tabs: configuration changed after start-up, keeping the original one");
    }
    controller.borrow_mut().initialize(&document);
    install_click_listener(&document, &controller);
}

impl SnippetController {
    fn new(config: SnippetsConfig) -> Self {
        Self {
            config,
            page: SnippetPage::new(),
            elements: Vec::new(),
            listening: false,
        }
    }

    fn uses_config(&self, requested: &SnippetsConfig) -> bool {
        self.config == *requested
    }

    fn initialize(&mut self, document: &Document) {
        let scanned = scan_groups(document, &self.config);
        let mut handles = Vec::with_capacity(scanned.len());
        let mut discovered = Vec::with_capacity(scanned.len());
        for group in scanned {
            handles.push(GroupElements {
                group: group.element,
                variants: group.variant_elements,
            });
            discovered.push(group.discovered);
        }

        let strips = self.page.initialize(discovered);
        let mut initialized = 0;
        for (handle, strip) in handles.into_iter().zip(strips) {
            let Some(strip) = strip else {
                continue;
            };
            if strip.is_empty() {
                log::debug!("snippet group {} has no variants", strip.group);
            }

            let _ = handle
                .group
                .set_attribute(&self.config.group_attribute, &strip.group.as_string());

            let spec = tab_strip_spec(&strip, &self.config);
            let inserted = build_element(document, &spec)
                .and_then(|header| insert_before(&header, &handle.group));
            if let Err(err) = inserted {
                log::warn!("snippet group {}: tab strip not inserted: {:?}", strip.group, err);
            }

            self.elements.push(handle);
            self.render(strip.group);
            initialized += 1;
        }

        log::info!(
            "snippet tabs: {} new group(s), {} total",
            initialized,
            self.page.groups().len()
        );
    }

    /// Mirrors the selection state of one group onto its variant elements.
    fn render(&self, id: GroupId) {
        let (Some(group), Some(elements)) = (self.page.group(id), self.elements.get(id.0)) else {
            return;
        };
        for (index, variant) in elements.variants.iter().enumerate() {
            set_visible(variant, group.is_visible(index));
        }
    }

    /// Handles a click inside the document. `None` when the click did not
    /// land on a tab.
    fn handle_click(&mut self, target: &Element) -> Option<Vec<(Element, SelectionChanged)>> {
        let tab = target.closest(&self.config.tab_selector()).ok()??;

        let Some(group) = tab
            .get_attribute(&self.config.group_attribute)
            .and_then(|value| GroupId::from_string(&value))
        else {
            log::warn!("snippet tab without a group id ignored");
            return Some(Vec::new());
        };
        let language = LanguageId::new(
            tab.get_attribute(&self.config.language_attribute)
                .unwrap_or_default(),
        );

        let selected = TabSelected { group, language };
        match self.page.select(&selected, self.config.scope) {
            Ok(changed) => {
                log::debug!(
                    "snippet tab `{}` in group {}: {} group(s) changed",
                    selected.language,
                    group,
                    changed.len()
                );
                let mut targets = Vec::with_capacity(changed.len());
                for event in changed {
                    self.render(event.group);
                    if let Some(elements) = self.elements.get(event.group.0) {
                        targets.push((elements.group.clone(), event));
                    }
                }
                Some(targets)
            }
            Err(err) => {
                log::warn!("snippet tab ignored: {}", err);
                Some(Vec::new())
            }
        }
    }
}

fn install_click_listener(document: &Document, controller: &Rc<RefCell<SnippetController>>) {
    if controller.borrow().listening {
        return;
    }

    let handler = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        // The borrow ends before events are dispatched, so listeners may
        // call back into the controller.
        let (changed, config) = {
            let mut controller = handler.borrow_mut();
            let Some(changed) = controller.handle_click(&target) else {
                return;
            };
            (changed, controller.config.clone())
        };

        event.prevent_default();
        if config.emit_events {
            for (element, payload) in &changed {
                emit_selection_changed(element, &config.event_name, payload);
            }
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    match document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        Ok(()) => controller.borrow_mut().listening = true,
        Err(err) => log::warn!("snippet tabs: click listener not installed: {:?}", err),
    }
    closure.forget();
}

fn emit_selection_changed(element: &Element, name: &str, payload: &SelectionChanged) {
    let detail = match serde_wasm_bindgen::to_value(payload) {
        Ok(detail) => detail,
        Err(err) => {
            log::warn!("snippet tabs: event payload not serialized: {}", err);
            return;
        }
    };

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            let _ = element.dispatch_event(&event);
        }
        Err(err) => log::warn!("snippet tabs: `{}` event not created: {:?}", name, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::config::PageConfig;
    use contracts::snippets::SelectionScope;

    #[test]
    fn test_first_configuration_is_kept() {
        let original = PageConfig::default().snippets;
        let controller = SnippetController::new(original.clone());
        assert!(controller.uses_config(&original));

        let mut changed = original.clone();
        changed.scope = SelectionScope::Group;
        assert!(!controller.uses_config(&changed));
        assert_eq!(controller.config.scope, SelectionScope::Page);
    }
}
