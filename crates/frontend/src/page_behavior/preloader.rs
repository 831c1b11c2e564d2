use crate::shared::dom::{select_all, set_visible};
use crate::shared::document_ready::on_window_load;
use contracts::shared::config::PageBehaviorConfig;

/// Hides the loading overlay once every page resource has loaded.
pub fn install(config: &PageBehaviorConfig) {
    let selector = config.preloader_selector.clone();
    on_window_load(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let preloaders = select_all(&document, &selector);
        for preloader in &preloaders {
            set_visible(preloader, false);
        }
        log::debug!("preloader hidden ({} element(s))", preloaders.len());
    });
}
