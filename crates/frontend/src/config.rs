use contracts::shared::config::{load_config, PageConfig};

/// Id of the optional `<script type="application/json">` block holding a
/// configuration override.
pub const CONFIG_ELEMENT_ID: &str = "page-behavior-config";

/// Configuration for the current page; falls back to the defaults when the
/// override is malformed.
pub fn page_config() -> PageConfig {
    let page_override = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match load_config(page_override.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{:#}; using default page configuration", err);
            PageConfig::default()
        }
    }
}
