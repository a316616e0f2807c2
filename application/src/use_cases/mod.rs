//! Use cases (application services)
//!
//! - [`translate_phrase`]: the decode adapter
//! - [`history_store`]: mutex-guarded session history
//! - [`decoder_session`]: in-flight guard plus history recording

pub mod decoder_session;
pub mod history_store;
pub mod translate_phrase;
