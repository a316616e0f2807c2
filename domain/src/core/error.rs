//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Phrase cannot be empty")]
    EmptyPhrase,

    #[error("Phrase is too long: {length} characters (max: {max})")]
    PhraseTooLong { length: usize, max: usize },

    #[error("Unknown translation mode: {0}")]
    UnknownMode(String),

    #[error("Unknown display language: {0}")]
    UnknownLanguage(String),
}
