use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::query::SearchQuery;

/// Retention window for history entries: 3 days
pub const RETENTION_MILLIS: i64 = 3 * 24 * 60 * 60 * 1000;

/// One persisted past search
///
/// The timestamp doubles as the entry's key for [`delete_one`] and
/// [`find`](crate::history_store::HistoryStore::find).
///
/// [`delete_one`]: crate::history_store::HistoryRepository::delete_one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub location: String,
    pub transport: String,
    pub time: String,
    /// Epoch milliseconds
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp_millis")]
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Age exceeds the retention window relative to `now_millis`
    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis.saturating_sub(self.timestamp) > RETENTION_MILLIS
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// History entry before the store stamps it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub location: String,
    pub transport: String,
    pub time: String,
}

impl NewHistoryEntry {
    pub fn new(
        location: impl Into<String>,
        transport: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self { location: location.into(), transport: transport.into(), time: time.into() }
    }

    pub fn stamped(self, timestamp: i64) -> HistoryEntry {
        HistoryEntry { location: self.location, transport: self.transport, time: self.time, timestamp }
    }
}

impl From<&SearchQuery> for NewHistoryEntry {
    fn from(query: &SearchQuery) -> Self {
        Self::new(query.location(), query.transport().as_str(), query.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: i64) -> HistoryEntry {
        NewHistoryEntry::new("Paris", "walking", "10m").stamped(timestamp)
    }

    #[test]
    fn test_expiry_boundary() {
        let now = 10 * RETENTION_MILLIS;
        assert!(!entry(now).is_expired(now));
        assert!(!entry(now - RETENTION_MILLIS).is_expired(now));
        assert!(entry(now - RETENTION_MILLIS - 1).is_expired(now));
    }

    #[test]
    fn test_future_entry_is_not_expired() {
        assert!(!entry(2_000).is_expired(1_000));
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(entry(1762076480016)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location": "Paris",
                "transport": "walking",
                "time": "10m",
                "timestamp": 1762076480016_i64
            })
        );
    }

    #[test]
    fn test_datetime_conversion() {
        let dt = entry(1762076480016).datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1762076480016);
    }
}
