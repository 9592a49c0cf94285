//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HISTORY_FILE: &str = "search-history.json";
pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Builder for test data directories holding a history file
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the history file verbatim
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(HISTORY_FILE), content)
            .expect("Failed to write history file");
        self
    }

    /// Write history entries as a JSON array, in the given order
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = format!(
            "[{}]",
            entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",")
        );
        self.with_history(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for persisted history entries
pub struct HistoryEntryBuilder {
    location: String,
    transport: String,
    time: String,
    timestamp: i64,
}

impl HistoryEntryBuilder {
    /// Create a new entry stamped "now"
    pub fn new() -> Self {
        Self {
            location: "Paris".to_string(),
            transport: "walking".to_string(),
            time: "10m".to_string(),
            timestamp: now_millis(),
        }
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn transport(mut self, transport: &str) -> Self {
        self.transport = transport.to_string();
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Shift the timestamp back by whole days
    pub fn days_ago(mut self, days: i64) -> Self {
        self.timestamp = now_millis() - days * DAY_MILLIS;
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "location": self.location,
            "transport": self.transport,
            "time": self.time,
            "timestamp": self.timestamp,
        })
        .to_string()
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the history file back as JSON
pub fn read_history_file(dir: &Path) -> Option<serde_json::Value> {
    let path: PathBuf = dir.join(HISTORY_FILE);
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Nominatim-style response body for one place
pub fn nominatim_body(display_name: &str, lat: &str, lon: &str) -> serde_json::Value {
    serde_json::json!([{
        "place_id": 88066702,
        "lat": lat,
        "lon": lon,
        "display_name": display_name,
        "type": "city",
    }])
}
