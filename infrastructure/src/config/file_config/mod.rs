//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod logging;
mod output;
mod translator;

pub use gemini::{DEFAULT_TIMEOUT_SECS, FileGeminiConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use translator::FileTranslatorConfig;

use nededi_application::TranslatorParams;
use nededi_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini provider settings
    pub gemini: FileGeminiConfig,
    /// Decode behaviour and starting selections
    pub translator: FileTranslatorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings fall back to defaults.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "gemini.model".to_string(),
                },
                message: "gemini.model must not be empty".to_string(),
            });
        }

        if self.gemini.base_url.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "gemini.base_url".to_string(),
                },
                message: "gemini.base_url must not be empty".to_string(),
            });
        }

        if self.gemini.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "gemini.timeout_secs".to_string(),
                },
                message: "gemini.timeout_secs must be at least 1".to_string(),
            });
        }

        if self.translator.max_phrase_chars == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "translator.max_phrase_chars".to_string(),
                },
                message: "translator.max_phrase_chars must be at least 1".to_string(),
            });
        }

        issues.extend(self.translator.parse_mode().1);
        issues.extend(self.translator.parse_language().1);

        issues
    }

    /// Parameters for the decode use case
    pub fn translator_params(&self) -> TranslatorParams {
        TranslatorParams::default()
            .with_model(self.gemini.model.trim())
            .with_max_phrase_chars(self.translator.max_phrase_chars)
    }
}

/// Raised when validation reports at least one error
#[derive(Debug)]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid configuration:")?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigValidationError {}

impl ConfigValidationError {
    /// Split issues into a hard error (if any error is present) and warnings
    pub fn check(issues: Vec<ConfigIssue>) -> Result<Vec<ConfigIssue>, Self> {
        if issues.iter().any(ConfigIssue::is_error) {
            Err(Self { issues })
        } else {
            Ok(issues)
        }
    }
}
