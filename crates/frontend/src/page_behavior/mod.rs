//! Page behaviors outside the snippet tabs.

pub mod button_group;
pub mod navbar;
pub mod preloader;

use contracts::shared::config::PageBehaviorConfig;

pub fn install(config: &PageBehaviorConfig) {
    navbar::install(config);
    preloader::install(config);
    button_group::install(config);
}
