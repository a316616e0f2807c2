//! Interactive chat module
//!
//! Provides a readline-based interactive decoding session.

mod repl;

pub use repl::{DecoderRepl, ReplCommand};
