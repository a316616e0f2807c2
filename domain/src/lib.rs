//! Domain layer for ne-dedi
//!
//! This crate contains the core types of the phrase decoder and has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Mode**: which gender's phrasing is decoded into the other's intended meaning
//! - **Display language**: language of the labels and of the model's free text
//! - **Translation result**: literal text, decoded meaning, relationship tip and vibe
//! - **History**: bounded, session-local list of past successful decodings

pub mod config;
pub mod core;
pub mod history;
pub mod preset;
pub mod prompt;
pub mod translation;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    language::DisplayLanguage,
    mode::TranslationMode,
    phrase::{DEFAULT_MAX_PHRASE_CHARS, Phrase},
};
pub use history::{HISTORY_CAPACITY, HistoryId, HistoryItem, SessionHistory};
pub use preset::preset_phrases;
pub use prompt::DecoderPromptTemplate;
pub use translation::{
    ResponseParseError, TranslationResult, parse_translation_result, strip_code_fence,
};
