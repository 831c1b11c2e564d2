//! Structured tab-strip markup.
//!
//! Tab strips are described as an [`ElementSpec`] tree and turned into real
//! elements by the frontend through element/attribute/text APIs. Labels and
//! language ids only ever land in attribute values or text content.

use super::model::TabStrip;
use crate::shared::config::SnippetsConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds the strip element inserted in front of a group.
pub fn tab_strip_spec(strip: &TabStrip, config: &SnippetsConfig) -> ElementSpec {
    strip.tabs.iter().fold(
        ElementSpec::new(&config.strip_tag).class(&config.strip_class),
        |header, tab| {
            header.child(
                ElementSpec::new(&config.tab_tag)
                    .class(&config.tab_class)
                    .attr(&config.language_attribute, tab.language.as_str())
                    .attr(&config.group_attribute, tab.group.as_string())
                    .text(&tab.label),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::PageConfig;
    use crate::snippets::model::{GroupId, SnippetGroup, SnippetVariant};

    fn strip(variants: Vec<SnippetVariant>) -> TabStrip {
        SnippetGroup::new(GroupId(2), variants).tab_strip()
    }

    #[test]
    fn test_tab_strip_spec_layout() {
        let config = PageConfig::default().snippets;
        let spec = tab_strip_spec(
            &strip(vec![
                SnippetVariant::new("python", "Python"),
                SnippetVariant::new("js", "JavaScript"),
            ]),
            &config,
        );

        assert_eq!(spec.tag, "div");
        assert_eq!(spec.classes, vec!["snippets-header"]);
        assert_eq!(spec.children.len(), 2);

        let js = &spec.children[1];
        assert_eq!(js.tag, "a");
        assert_eq!(js.attribute("data-language"), Some("js"));
        assert_eq!(js.attribute("data-snippet-group"), Some("2"));
        assert_eq!(js.text.as_deref(), Some("JavaScript"));
    }

    #[test]
    fn test_markup_like_labels_stay_text() {
        let config = PageConfig::default().snippets;
        let spec = tab_strip_spec(
            &strip(vec![SnippetVariant::new(
                "x\"><script>",
                "<img src=x onerror=alert(1)>",
            )]),
            &config,
        );

        let tab = &spec.children[0];
        assert!(tab.children.is_empty());
        assert_eq!(tab.text.as_deref(), Some("<img src=x onerror=alert(1)>"));
        assert_eq!(tab.attribute("data-language"), Some("x\"><script>"));
        assert_eq!(tab.classes, vec!["snippet-choose"]);
    }

    #[test]
    fn test_empty_strip_has_no_children() {
        let config = PageConfig::default().snippets;
        let spec = tab_strip_spec(&strip(Vec::new()), &config);
        assert_eq!(spec.classes, vec!["snippets-header"]);
        assert!(spec.children.is_empty());
        assert!(spec.text.is_none());
    }
}
