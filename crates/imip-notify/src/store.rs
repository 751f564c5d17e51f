//! Invitation token persistence.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use thiserror::Error;

/// A persisted invitation token record.
///
/// Identifies one attendee's standing invitation to one event instance;
/// the token itself is the capability used by response links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationToken {
    pub token: String,
    pub attendee: String,
    pub organizer: String,
    pub uid: String,
    pub recurrence_id: Option<String>,
    pub sequence: i32,
    pub expiration: DateTime<Utc>,
}

/// Token persistence failure.
#[derive(Debug, Error)]
#[error("Token store failure: {0}")]
pub struct StoreError(pub String);

/// Persistence for invitation tokens.
pub trait TokenStore {
    /// ## Summary
    /// Persists a freshly issued token record.
    ///
    /// ## Errors
    /// Returns a [`StoreError`] when the record cannot be stored.
    fn insert(&self, record: InvitationToken) -> Result<(), StoreError>;
}

/// In-memory token store, mainly for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    records: Mutex<Vec<InvitationToken>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record; empty when the inner lock is
    /// poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<InvitationToken> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn insert(&self, record: InvitationToken) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError("Poisoned token store lock".to_owned()))?
            .push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_keeps_records() {
        let store = MemoryTokenStore::new();
        let record = InvitationToken {
            token: "abc".to_owned(),
            attendee: "a@example.com".to_owned(),
            organizer: "o@example.com".to_owned(),
            uid: "uid-1".to_owned(),
            recurrence_id: None,
            sequence: 0,
            expiration: DateTime::<Utc>::MAX_UTC,
        };
        store.insert(record.clone()).unwrap();
        assert_eq!(store.records(), vec![record]);
    }
}
