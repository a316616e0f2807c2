//! Core domain concepts shared across all subdomains.
//!
//! - [`mode::TranslationMode`]: which direction a phrase is decoded in
//! - [`language::DisplayLanguage`]: language of labels and model output
//! - [`phrase::Phrase`]: a validated phrase to decode
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod language;
pub mod mode;
pub mod phrase;
