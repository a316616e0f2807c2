//! History entities

use crate::core::{language::DisplayLanguage, mode::TranslationMode};
use crate::translation::TranslationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a history entry, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(Uuid);

impl HistoryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to pick an entry by hand
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for HistoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A successful decoding recorded in the session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: HistoryId,
    #[serde(flatten)]
    pub result: TranslationResult,
    pub mode: TranslationMode,
    pub language: DisplayLanguage,
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    /// Build an item with a fresh id stamped with the current time
    pub fn new(result: TranslationResult, mode: TranslationMode, language: DisplayLanguage) -> Self {
        Self {
            id: HistoryId::generate(),
            result,
            mode,
            language,
            timestamp: Utc::now(),
        }
    }
}
