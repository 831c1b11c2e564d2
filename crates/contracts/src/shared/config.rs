use crate::snippets::SelectionScope;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PageConfig {
    pub snippets: SnippetsConfig,
    pub page: PageBehaviorConfig,
}

/// Markup contract of the snippet tab-switcher.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SnippetsConfig {
    pub group_selector: String,
    /// Tag of the direct children treated as variants.
    pub variant_tag: String,
    pub label_attribute: String,
    pub strip_tag: String,
    pub strip_class: String,
    pub tab_tag: String,
    pub tab_class: String,
    pub language_attribute: String,
    /// Carried by tabs and by initialized groups.
    pub group_attribute: String,
    pub scope: SelectionScope,
    pub emit_events: bool,
    pub event_name: String,
}

impl SnippetsConfig {
    pub fn tab_selector(&self) -> String {
        format!(".{}", self.tab_class)
    }
}

/// Small behaviors of the page outside the snippet tabs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PageBehaviorConfig {
    pub navbar_selector: String,
    pub fixed_class: String,
    /// Vertical scroll offset in px past which the navbar is fixed.
    pub scroll_threshold: f64,
    pub preloader_selector: String,
    pub button_group_selector: String,
    pub button_selector: String,
    pub checked_class: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[snippets]
group_selector = ".snippets"
variant_tag = "div"
label_attribute = "data-languagename"
strip_tag = "div"
strip_class = "snippets-header"
tab_tag = "a"
tab_class = "snippet-choose"
language_attribute = "data-language"
group_attribute = "data-snippet-group"
scope = "page"
emit_events = true
event_name = "snippet-tabs:select"

[page]
navbar_selector = ".navbar"
fixed_class = "fixed"
scroll_threshold = 50.0
preloader_selector = ".loading"
button_group_selector = ".button-group"
button_selector = "a"
checked_class = "is-checked"
"#;

impl Default for PageConfig {
    /// The embedded default; `test_default_config_loads` keeps it parseable.
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default configuration is valid")
    }
}

/// Load the page configuration
///
/// Starts from the embedded default and merges the JSON override embedded
/// in the page on top of it. Fields missing from the override keep their
/// default values.
pub fn load_config(page_override: Option<&str>) -> anyhow::Result<PageConfig> {
    let mut config: serde_json::Value =
        toml::from_str(DEFAULT_CONFIG).context("parse embedded default configuration")?;

    if let Some(json) = page_override.map(str::trim).filter(|s| !s.is_empty()) {
        let page_override: serde_json::Value =
            serde_json::from_str(json).context("parse page configuration override")?;
        merge(&mut config, page_override);
    }

    serde_json::from_value(config).context("invalid page configuration")
}

/// Deep-merges `patch` into `base`; objects merge key by key, anything else
/// replaces.
fn merge(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<PageConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), PageConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some(r#"{ "snippets": { "scope": "group" } }"#)).unwrap();
        assert_eq!(config.snippets.scope, SelectionScope::Group);
        assert_eq!(config.snippets.tab_class, "snippet-choose");
        assert_eq!(config.page.scroll_threshold, 50.0);
    }

    #[test]
    fn test_blank_override_uses_default() {
        let config = load_config(Some("  \n ")).unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(load_config(Some("{ snippets: ")).is_err());
    }

    #[test]
    fn test_override_replaces_nested_values_only() {
        let config = load_config(Some(
            r#"{ "page": { "scroll_threshold": 120.0, "checked_class": "active" } }"#,
        ))
        .unwrap();
        assert_eq!(config.page.scroll_threshold, 120.0);
        assert_eq!(config.page.checked_class, "active");
        assert_eq!(config.page.navbar_selector, ".navbar");
        assert_eq!(config.snippets, PageConfig::default().snippets);
    }

    #[test]
    fn test_override_with_wrong_type_is_an_error() {
        assert!(load_config(Some(r#"{ "snippets": { "emit_events": "yes" } }"#)).is_err());
    }

    #[test]
    fn test_tab_selector() {
        assert_eq!(PageConfig::default().snippets.tab_selector(), ".snippet-choose");
    }
}
