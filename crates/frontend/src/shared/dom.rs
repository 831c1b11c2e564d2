use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList};

pub fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements matching `selector` under `root`; an invalid selector yields none.
pub fn select_all(root: &web_sys::Document, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => {
            log::warn!("invalid selector `{}`", selector);
            Vec::new()
        }
    }
}

pub fn select_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => {
            log::warn!("invalid selector `{}`", selector);
            Vec::new()
        }
    }
}

/// Direct children with the given tag name, in document order.
pub fn child_elements(parent: &Element, tag: &str) -> Vec<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|child| child.tag_name().eq_ignore_ascii_case(tag))
        .collect()
}

/// Show or hide an element through its inline `display` style.
pub fn set_visible(element: &Element, visible: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
}
