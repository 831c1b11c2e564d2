use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a snippet group on the page, in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub usize);

impl GroupId {
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Option<Self> {
        s.trim().parse::<usize>().ok().map(GroupId)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language key of a snippet, e.g. `"python"`.
///
/// Read from the first token of the variant's `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(String);

impl LanguageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// First whitespace-separated token of a class attribute.
    /// An absent or blank attribute yields the empty id.
    pub fn from_class_attribute(class: Option<&str>) -> Self {
        let token = class
            .and_then(|c| c.split_whitespace().next())
            .unwrap_or_default();
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One language-specific sample inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetVariant {
    pub language: LanguageId,
    pub label: String,
}

impl SnippetVariant {
    pub fn new(language: impl Into<LanguageId>, label: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            label: label.into(),
        }
    }

    /// Builds a variant from raw markup attributes.
    /// A missing label falls back to the language id.
    pub fn from_attributes(class: Option<&str>, label: Option<&str>) -> Self {
        let language = LanguageId::from_class_attribute(class);
        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .unwrap_or_else(|| language.as_str().to_string());
        Self { language, label }
    }
}

/// Which variants of a group are currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "language", rename_all = "snake_case")]
pub enum Selection {
    /// Initial state: only the first variant is shown.
    #[default]
    First,
    /// Every variant carrying this language is shown.
    Language(LanguageId),
}

/// A clickable control selecting one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub group: GroupId,
    pub index: usize,
    pub language: LanguageId,
    pub label: String,
}

/// Ordered tabs of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStrip {
    pub group: GroupId,
    pub tabs: Vec<Tab>,
}

impl TabStrip {
    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// A container of alternative code samples for the same concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetGroup {
    pub id: GroupId,
    pub variants: Vec<SnippetVariant>,
    pub selection: Selection,
}

impl SnippetGroup {
    pub fn new(id: GroupId, variants: Vec<SnippetVariant>) -> Self {
        Self {
            id,
            variants,
            selection: Selection::First,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn contains_language(&self, language: &LanguageId) -> bool {
        self.variants.iter().any(|v| &v.language == language)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        let Some(variant) = self.variants.get(index) else {
            return false;
        };
        match &self.selection {
            Selection::First => index == 0,
            Selection::Language(language) => &variant.language == language,
        }
    }

    /// Visibility flag for every variant, in document order.
    pub fn visibility(&self) -> Vec<bool> {
        (0..self.variants.len()).map(|i| self.is_visible(i)).collect()
    }

    pub fn visible_languages(&self) -> Vec<&LanguageId> {
        self.variants
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_visible(*i))
            .map(|(_, v)| &v.language)
            .collect()
    }

    pub fn tab_strip(&self) -> TabStrip {
        let tabs = self
            .variants
            .iter()
            .enumerate()
            .map(|(index, variant)| Tab {
                group: self.id,
                index,
                language: variant.language.clone(),
                label: variant.label.clone(),
            })
            .collect();
        TabStrip {
            group: self.id,
            tabs,
        }
    }

    /// Switches to `language` and reports whether the visible variants changed.
    pub fn show_language(&mut self, language: &LanguageId) -> bool {
        let before = self.visibility();
        self.selection = Selection::Language(language.clone());
        self.visibility() != before
    }

    /// Label of the first variant with this language, if any.
    pub fn label_for(&self, language: &LanguageId) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| &v.language == language)
            .map(|v| v.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> SnippetGroup {
        SnippetGroup::new(
            GroupId(0),
            vec![
                SnippetVariant::new("python", "Python"),
                SnippetVariant::new("js", "JavaScript"),
            ],
        )
    }

    #[test]
    fn test_language_from_class_attribute() {
        assert_eq!(LanguageId::from_class_attribute(Some("python")).as_str(), "python");
        assert_eq!(
            LanguageId::from_class_attribute(Some("  rust highlight ")).as_str(),
            "rust"
        );
        assert!(LanguageId::from_class_attribute(Some("   ")).is_empty());
        assert!(LanguageId::from_class_attribute(None).is_empty());
    }

    #[test]
    fn test_variant_label_falls_back_to_language() {
        let variant = SnippetVariant::from_attributes(Some("go"), None);
        assert_eq!(variant.label, "go");

        let variant = SnippetVariant::from_attributes(Some("go"), Some(" Go "));
        assert_eq!(variant.label, "Go");
    }

    #[test]
    fn test_initial_selection_shows_first_only() {
        let group = sample_group();
        assert_eq!(group.visibility(), vec![true, false]);
        assert!(!group.is_visible(7));
    }

    #[test]
    fn test_tab_strip_follows_variant_order() {
        let strip = sample_group().tab_strip();
        assert_eq!(strip.labels(), vec!["Python", "JavaScript"]);
        assert_eq!(strip.tabs[1].index, 1);
        assert_eq!(strip.tabs[1].language.as_str(), "js");
        assert!(strip.tabs.iter().all(|t| t.group == GroupId(0)));
    }

    #[test]
    fn test_language_selection_derives_visibility() {
        let mut group = sample_group();
        group.selection = Selection::Language("js".into());
        assert_eq!(group.visibility(), vec![false, true]);
        assert_eq!(group.visible_languages(), vec![&LanguageId::from("js")]);
    }

    #[test]
    fn test_show_language_reports_changes() {
        let mut group = sample_group();
        assert!(!group.show_language(&"python".into()));
        assert!(group.show_language(&"js".into()));
        assert!(!group.show_language(&"js".into()));
    }

    #[test]
    fn test_group_id_parsing() {
        assert_eq!(GroupId::from_string("3"), Some(GroupId(3)));
        assert_eq!(GroupId::from_string("x"), None);
        assert_eq!(GroupId(12).as_string(), "12");
    }

    #[test]
    fn test_selection_serializes_tagged() {
        let json = serde_json::to_string(&Selection::Language("rust".into())).unwrap();
        assert_eq!(json, r#"{"kind":"language","language":"rust"}"#);
    }
}
