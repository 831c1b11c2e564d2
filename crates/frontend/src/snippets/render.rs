use contracts::snippets::ElementSpec;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node};

/// Creates the element tree described by `spec`.
///
/// Text and attribute values go through the DOM APIs, never through
/// `innerHTML`.
pub fn build_element(document: &Document, spec: &ElementSpec) -> Result<Element, JsValue> {
    let element = document.create_element(&spec.tag)?;
    if !spec.classes.is_empty() {
        element.set_class_name(&spec.classes.join(" "));
    }
    for (name, value) in &spec.attributes {
        element.set_attribute(name, value)?;
    }
    if let Some(text) = &spec.text {
        element.set_text_content(Some(text));
    }
    for child in &spec.children {
        let child: Element = build_element(document, child)?;
        element.append_child(&child)?;
    }
    Ok(element)
}

/// Inserts `element` as the immediately preceding sibling of `anchor`.
pub fn insert_before(element: &Element, anchor: &Element) -> Result<(), JsValue> {
    let parent = anchor
        .parent_node()
        .ok_or_else(|| JsValue::from_str("snippet group has no parent node"))?;
    let anchor: &Node = anchor;
    parent.insert_before(element, Some(anchor))?;
    Ok(())
}
