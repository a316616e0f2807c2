//! Gemini provider configuration from TOML (`[gemini]` section)

use nededi_application::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key: explicit value first, then the environment.
    ///
    /// Read once, when the gateway is built.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileGeminiConfig::default();
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("explicit".to_string()),
            api_key_env: "NEDEDI_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_key_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NEDEDI_TEST_KEY", "from-env");
            let config = FileGeminiConfig {
                api_key: Some("  ".to_string()),
                api_key_env: "NEDEDI_TEST_KEY".to_string(),
                ..Default::default()
            };
            assert_eq!(config.resolve_api_key().as_deref(), Some("from-env"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_key_is_none() {
        let config = FileGeminiConfig {
            api_key_env: "NEDEDI_TEST_SURELY_UNSET_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
