//! Application-level configuration.
//!
//! - [`TranslatorParams`]: model id and input cap for the decode use case

pub mod translator_params;

pub use translator_params::{DEFAULT_MODEL, TranslatorParams};
