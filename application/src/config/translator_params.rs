//! Translator parameters: adapter-level settings.

use nededi_domain::DEFAULT_MAX_PHRASE_CHARS;
use serde::{Deserialize, Serialize};

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Settings for [`TranslatePhraseUseCase`](crate::use_cases::translate_phrase::TranslatePhraseUseCase).
///
/// The model id is configuration, never user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorParams {
    /// Model identifier passed to the gateway.
    pub model: String,
    /// Longest accepted phrase, in characters.
    pub max_phrase_chars: usize,
}

impl Default for TranslatorParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_phrase_chars: DEFAULT_MAX_PHRASE_CHARS,
        }
    }
}

impl TranslatorParams {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_phrase_chars(mut self, max: usize) -> Self {
        self.max_phrase_chars = max;
        self
    }
}
