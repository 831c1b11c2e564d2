//! Reads snippet groups out of the live page markup.

use crate::shared::dom::{child_elements, select_all};
use contracts::shared::config::SnippetsConfig;
use contracts::snippets::{DiscoveredGroup, GroupId, SnippetVariant};
use web_sys::{Document, Element};

pub struct ScannedGroup {
    pub element: Element,
    pub variant_elements: Vec<Element>,
    pub discovered: DiscoveredGroup,
}

pub fn scan_groups(document: &Document, config: &SnippetsConfig) -> Vec<ScannedGroup> {
    select_all(document, &config.group_selector)
        .into_iter()
        .map(|element| scan_group(element, config))
        .collect()
}

fn scan_group(element: Element, config: &SnippetsConfig) -> ScannedGroup {
    let marker = element
        .get_attribute(&config.group_attribute)
        .and_then(|value| GroupId::from_string(&value));

    let variant_elements = child_elements(&element, &config.variant_tag);
    let variants = variant_elements
        .iter()
        .map(|variant| {
            let class = variant.get_attribute("class");
            let label = variant.get_attribute(&config.label_attribute);
            let parsed = SnippetVariant::from_attributes(class.as_deref(), label.as_deref());
            if parsed.language.is_empty() {
                log::warn!("snippet variant without a language class");
            }
            if label.is_none() {
                log::warn!(
                    "snippet variant `{}` has no {} attribute",
                    parsed.language,
                    config.label_attribute
                );
            }
            parsed
        })
        .collect();

    ScannedGroup {
        element,
        variant_elements,
        discovered: DiscoveredGroup { marker, variants },
    }
}
