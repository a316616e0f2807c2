//! Phrase value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default cap on phrase length, in Unicode scalar values.
pub const DEFAULT_MAX_PHRASE_CHARS: usize = 2000;

/// A phrase to be decoded (Value Object)
///
/// Holds the user's text exactly as typed. Validation only looks at the
/// trimmed content, the stored text is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    text: String,
}

impl Phrase {
    /// Create a phrase using [`DEFAULT_MAX_PHRASE_CHARS`] as the length cap
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_max_chars(text, DEFAULT_MAX_PHRASE_CHARS)
    }

    /// Create a phrase with an explicit length cap
    ///
    /// Fails with [`DomainError::EmptyPhrase`] for blank input and
    /// [`DomainError::PhraseTooLong`] when the text exceeds `max_chars`.
    pub fn with_max_chars(text: impl Into<String>, max_chars: usize) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyPhrase);
        }
        let length = text.chars().count();
        if length > max_chars {
            return Err(DomainError::PhraseTooLong {
                length,
                max: max_chars,
            });
        }
        Ok(Self { text })
    }

    /// Get the phrase text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_creation() {
        let p = Phrase::new("I'm fine.").unwrap();
        assert_eq!(p.text(), "I'm fine.");
    }

    #[test]
    fn test_phrase_keeps_surrounding_whitespace() {
        let p = Phrase::new("  We need to talk.  ").unwrap();
        assert_eq!(p.text(), "  We need to talk.  ");
    }

    #[test]
    fn test_blank_phrase_rejected() {
        assert_eq!(Phrase::new(""), Err(DomainError::EmptyPhrase));
        assert_eq!(Phrase::new(" \n\t "), Err(DomainError::EmptyPhrase));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 4 Cyrillic chars, 8 bytes
        assert!(Phrase::with_max_chars("Ойой", 4).is_ok());
        assert_eq!(
            Phrase::with_max_chars("Ойой!", 4),
            Err(DomainError::PhraseTooLong { length: 5, max: 4 })
        );
    }

    #[test]
    fn test_default_cap() {
        let at_cap = "a".repeat(DEFAULT_MAX_PHRASE_CHARS);
        assert!(Phrase::new(at_cap).is_ok());
        let over = "a".repeat(DEFAULT_MAX_PHRASE_CHARS + 1);
        assert!(matches!(
            Phrase::new(over),
            Err(DomainError::PhraseTooLong { .. })
        ));
    }
}
