//! Shell configuration: branding texts and log filter.
//!
//! Installed once at startup; components read it through [`current`].

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{Result, ShellError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    pub tagline: String,
    pub footer_note: String,
    /// `tracing` filter directive used by the native subscriber
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "PWA Shop".to_string(),
            tagline: "Your progressive store".to_string(),
            footer_note: "Works offline with Service Workers".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(raw)?;
        if config.title.trim().is_empty() {
            return Err(ShellError::Config("title must not be empty".to_string()));
        }
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

static CONFIG: OnceCell<ShellConfig> = OnceCell::new();

/// Install the process-wide configuration. Returns `false` if one was
/// already installed (the first one wins).
pub fn install(config: ShellConfig) -> bool {
    CONFIG.set(config).is_ok()
}

pub fn current() -> &'static ShellConfig {
    CONFIG.get_or_init(ShellConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShellConfig::from_json(r#"{ "title": "Corner Shop" }"#).unwrap();
        assert_eq!(config.title, "Corner Shop");
        assert_eq!(config.tagline, ShellConfig::default().tagline);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = ShellConfig::from_json("{ title: }").unwrap_err();
        assert!(matches!(err, ShellError::SerializationError(_)));
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = ShellConfig::from_json(r#"{ "title": "  " }"#).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file() {
        let err = ShellConfig::load(std::path::Path::new("/nonexistent/pwa-shop.json")).unwrap_err();
        assert!(matches!(err, ShellError::IoError(_)));
    }
}
