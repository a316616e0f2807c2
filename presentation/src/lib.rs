//! Presentation layer for ne-dedi
//!
//! This crate contains CLI definitions, output formatters,
//! progress indicators, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{DecoderRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::labels::UiText;
pub use progress::reporter::{SimpleProgress, WaitingIndicator};
