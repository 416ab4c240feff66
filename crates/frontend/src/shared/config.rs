//! Editor configuration supplied by the hosting page.
//!
//! The page may embed TOML in
//! `<script type="application/toml" id="samplest-config">`; anything it leaves
//! out keeps the built-in default.

use contracts::shared::config::{load_config, EditorConfig};
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "samplest-config";

fn page_config_text() -> Option<String> {
    window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

pub fn editor_config() -> EditorConfig {
    load_config(page_config_text().as_deref())
}
