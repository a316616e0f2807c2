//! Translation domain
//!
//! The decoded result type and the strict parser for model responses.

pub mod parsing;
pub mod result;

pub use parsing::{ResponseParseError, parse_translation_result, strip_code_fence};
pub use result::TranslationResult;
