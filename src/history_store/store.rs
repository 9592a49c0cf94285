//! Capped, expiring search history

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::backend::StorageBackend;
use super::clock::{Clock, SystemClock};
use crate::models::{HistoryEntry, NewHistoryEntry, RETENTION_MILLIS};

/// Maximum number of entries kept
pub const HISTORY_CAPACITY: usize = 10;

/// Operations the rest of the application needs from search history
pub trait HistoryRepository {
    /// Record a search, returning the entry as stored
    fn save(&self, entry: NewHistoryEntry) -> Result<HistoryEntry>;

    /// Current entries, newest first, expired ones purged
    fn list(&self) -> Result<Vec<HistoryEntry>>;

    /// Remove the entry with this timestamp; no-op when absent
    fn delete_one(&self, timestamp: i64) -> Result<()>;

    /// Remove every entry
    fn clear_all(&self) -> Result<()>;
}

/// [`HistoryRepository`] over a [`StorageBackend`]
///
/// The backend holds a JSON array of entries, newest first. Every read drops
/// entries older than the retention window and writes the pruned list back if
/// anything was dropped. A payload that fails to parse is treated as an empty
/// history.
///
/// Timestamps are the entries' identity. `save` stamps the current time and
/// moves forward a millisecond at a time only while that exact timestamp is
/// already taken, so no two stored entries share one.
#[derive(Debug)]
pub struct HistoryStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    capacity: usize,
    retention_millis: i64,
}

impl<B: StorageBackend> HistoryStore<B, SystemClock> {
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> HistoryStore<B, C> {
    pub fn with_clock(backend: B, clock: C) -> Self {
        Self { backend, clock, capacity: HISTORY_CAPACITY, retention_millis: RETENTION_MILLIS }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Look up one entry by timestamp
    pub fn find(&self, timestamp: i64) -> Result<Option<HistoryEntry>> {
        Ok(self.list()?.into_iter().find(|e| e.timestamp == timestamp))
    }

    fn is_expired(&self, entry: &HistoryEntry, now: i64) -> bool {
        now.saturating_sub(entry.timestamp) > self.retention_millis
    }

    /// Entries exactly as persisted; corrupt payloads read as empty
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let Some(payload) = self.backend.read()? else {
            return Ok(Vec::new());
        };

        if payload.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<HistoryEntry>>(&payload) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Failed to parse search history, treating it as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, entries: &[HistoryEntry]) -> Result<()> {
        let payload = serde_json::to_string(entries).context("Failed to serialize history")?;
        self.backend.write(&payload)
    }
}

impl<B: StorageBackend, C: Clock> HistoryRepository for HistoryStore<B, C> {
    fn save(&self, entry: NewHistoryEntry) -> Result<HistoryEntry> {
        let mut entries = self.list()?;

        let mut timestamp = self.clock.now_millis();
        while entries.iter().any(|e| e.timestamp == timestamp) {
            timestamp = timestamp.checked_add(1).context("History timestamp out of range")?;
        }

        let entry = entry.stamped(timestamp);
        entries.insert(0, entry.clone());
        entries.truncate(self.capacity);
        self.persist(&entries)?;

        debug!(timestamp, location = %entry.location, "Saved search to history");
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self.load()?;
        let total = entries.len();

        let now = self.clock.now_millis();
        let valid: Vec<HistoryEntry> =
            entries.into_iter().filter(|e| !self.is_expired(e, now)).collect();

        if valid.len() != total {
            debug!(purged = total - valid.len(), "Purged expired history entries");
            self.persist(&valid)?;
        }

        Ok(valid)
    }

    fn delete_one(&self, timestamp: i64) -> Result<()> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|e| e.timestamp != timestamp);

        if entries.len() != before {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        self.backend.remove()
    }
}
