//! Translator configuration from TOML (`[translator]` section)

use nededi_domain::core::error::DomainError;
use nededi_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_MAX_PHRASE_CHARS, DisplayLanguage, Severity,
    TranslationMode,
};
use serde::{Deserialize, Serialize};

/// Raw translator configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranslatorConfig {
    /// Longest accepted phrase, in characters.
    pub max_phrase_chars: usize,
    /// Starting mode: "women-to-men" or "men-to-women".
    pub default_mode: String,
    /// Starting display language: "en", "ru" or "kk".
    pub default_language: String,
}

impl Default for FileTranslatorConfig {
    fn default() -> Self {
        Self {
            max_phrase_chars: DEFAULT_MAX_PHRASE_CHARS,
            default_mode: TranslationMode::default().as_str().to_string(),
            default_language: DisplayLanguage::default().code().to_string(),
        }
    }
}

impl FileTranslatorConfig {
    /// Parse `default_mode`, falling back to the default with a warning.
    pub fn parse_mode(&self) -> (TranslationMode, Vec<ConfigIssue>) {
        match self.default_mode.parse::<TranslationMode>() {
            Ok(mode) => (mode, Vec::new()),
            Err(e) => (
                TranslationMode::default(),
                vec![invalid_enum(
                    "translator.default_mode",
                    &self.default_mode,
                    TranslationMode::all().iter().map(|m| m.as_str()),
                    e,
                )],
            ),
        }
    }

    /// Parse `default_language`, falling back to the default with a warning.
    pub fn parse_language(&self) -> (DisplayLanguage, Vec<ConfigIssue>) {
        match self.default_language.parse::<DisplayLanguage>() {
            Ok(language) => (language, Vec::new()),
            Err(e) => (
                DisplayLanguage::default(),
                vec![invalid_enum(
                    "translator.default_language",
                    &self.default_language,
                    DisplayLanguage::all().iter().map(|l| l.code()),
                    e,
                )],
            ),
        }
    }
}

fn invalid_enum<'a>(
    field: &str,
    value: &str,
    valid: impl Iterator<Item = &'a str>,
    error: DomainError,
) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Warning,
        code: ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values: valid.map(str::to_string).collect(),
        },
        message: format!("{field}: {error}, falling back to the default"),
    }
}
