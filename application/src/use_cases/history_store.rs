//! Session history store.
//!
//! Wraps the domain [`SessionHistory`] behind a mutex so that concurrent
//! `record_success` calls from one session cannot break the
//! newest-first, capped ordering.

use nededi_domain::{
    DisplayLanguage, HistoryId, HistoryItem, SessionHistory, TranslationMode, TranslationResult,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Single-writer store for one session's history
#[derive(Debug, Default)]
pub struct HistoryStore {
    inner: Mutex<SessionHistory>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionHistory> {
        // A panic while holding the lock cannot leave the deque half-updated
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a successful decoding; returns the stored item
    pub fn record_success(
        &self,
        result: TranslationResult,
        mode: TranslationMode,
        language: DisplayLanguage,
    ) -> HistoryItem {
        let mut history = self.lock();
        let item = history.record(result, mode, language);
        debug!("Recorded history item {} ({} total)", item.id, history.len());
        item
    }

    /// Snapshot, newest first
    pub fn list(&self) -> Vec<HistoryItem> {
        self.lock().items()
    }

    /// Look up a past result without touching order or the network
    pub fn select_item(&self, id: &HistoryId) -> Option<HistoryItem> {
        self.lock().get(id).cloned()
    }

    /// Look up by one-based position in the newest-first list
    pub fn select_position(&self, position: usize) -> Option<HistoryItem> {
        position
            .checked_sub(1)
            .and_then(|index| self.lock().nth(index).cloned())
    }

    /// Look up by the short id prefix shown in listings
    pub fn select_prefix(&self, prefix: &str) -> Option<HistoryItem> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let history = self.lock();
        let mut matches = history
            .iter()
            .filter(|item| item.id.to_string().replace('-', "").starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Some(item.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
