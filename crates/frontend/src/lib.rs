pub mod config;
pub mod page_behavior;
pub mod shared;
pub mod snippets;

use shared::document_ready::on_document_ready;
use wasm_bindgen::prelude::wasm_bindgen;

/// Wires every page behavior once the document structure is ready.
pub fn boot() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    on_document_ready(|| {
        let config = config::page_config();
        snippets::initialize(&config.snippets);
        page_behavior::install(&config.page);
    });
}

/// Re-scan the page for snippet groups added after start-up.
#[wasm_bindgen(js_name = initializeSnippetTabs)]
pub fn initialize_snippet_tabs() {
    snippets::initialize(&config::page_config().snippets);
}

#[wasm_bindgen(start)]
pub fn start() {
    boot();
}
