//! Runtime Configuration
//!
//! Reads an optional `window.NOTES_CONFIG` object set by the host page.

use notes_core::NotesConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "NOTES_CONFIG";

/// Host-page overrides merged over defaults
pub fn load_config() -> NotesConfig {
    let Some(window) = web_sys::window() else {
        return NotesConfig::default();
    };
    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return NotesConfig::default(),
    };
    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
        NotesConfig::default()
    })
}
