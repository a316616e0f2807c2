//! Bounded newest-first history of decoded phrases

use super::entities::{HistoryId, HistoryItem};
use crate::core::{language::DisplayLanguage, mode::TranslationMode};
use crate::translation::TranslationResult;
use std::collections::VecDeque;

/// Maximum number of entries kept in a session history
pub const HISTORY_CAPACITY: usize = 10;

/// Ordered history of successful decodings (Entity)
///
/// Newest entries sit at the front. Inserting past [`HISTORY_CAPACITY`]
/// drops the oldest entry. Identical phrases are recorded separately.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    items: VecDeque<HistoryItem>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Record a successful decoding and return the created item
    pub fn record(
        &mut self,
        result: TranslationResult,
        mode: TranslationMode,
        language: DisplayLanguage,
    ) -> HistoryItem {
        self.push(HistoryItem::new(result, mode, language))
    }

    /// Insert an already built item at the front
    pub fn push(&mut self, item: HistoryItem) -> HistoryItem {
        self.items.push_front(item.clone());
        self.items.truncate(HISTORY_CAPACITY);
        item
    }

    /// Snapshot of all items, newest first
    pub fn items(&self) -> Vec<HistoryItem> {
        self.items.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    /// Look up an item by id
    pub fn get(&self, id: &HistoryId) -> Option<&HistoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Item at a zero-based position, 0 being the newest
    pub fn nth(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
