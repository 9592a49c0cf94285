//! Persistent search history
//!
//! Keeps the ten most recent searches, newest first, and forgets anything
//! older than three days. Expiry happens lazily: every read filters out stale
//! entries and writes the pruned list back.
//!
//! Storage is a single slot of JSON text behind [`StorageBackend`]:
//! - [`JsonFileBackend`]: `search-history.json` in the data directory
//! - [`MemoryBackend`]: in-process, for tests
//!
//! The store is single-writer. Two processes saving at the same moment can
//! lose one of the writes; the atomic rename only guarantees nobody reads a
//! half-written file.

pub mod backend;
pub mod clock;
pub mod store;

pub use backend::{HISTORY_FILENAME, JsonFileBackend, MemoryBackend, StorageBackend};
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{HISTORY_CAPACITY, HistoryRepository, HistoryStore};
