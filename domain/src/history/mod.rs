//! Session history domain
//!
//! - [`entities::HistoryItem`]: a decoded result plus its request context
//! - [`session_history::SessionHistory`]: bounded newest-first list

pub mod entities;
pub mod session_history;

pub use entities::{HistoryId, HistoryItem};
pub use session_history::{HISTORY_CAPACITY, SessionHistory};
