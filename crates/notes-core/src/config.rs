//! Widget Configuration
//!
//! Every field has a default so a partial (or missing) config object works.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

/// Storage key used by earlier versions of the widget
pub const DEFAULT_STORAGE_KEY: &str = "myNotesApp_notes";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotesConfig {
    /// Key holding the serialized note list
    pub storage_key: String,
    /// How long the empty-input highlight stays on, in milliseconds
    pub invalid_flash_ms: u32,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            invalid_flash_ms: 1500,
            log_level: "info".to_string(),
        }
    }
}

impl NotesConfig {
    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: NotesConfig = serde_json::from_str(r#"{"storageKey":"work_notes"}"#).unwrap();
        assert_eq!(config.storage_key, "work_notes");
        assert_eq!(config.invalid_flash_ms, 1500);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_level_filter_parsing() {
        let mut config = NotesConfig::default();
        config.log_level = "DEBUG".into();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
