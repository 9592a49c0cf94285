//! Isochrone Viewer - how far can you get in a given time?
//!
//! Enter a location, a transport mode and a time budget; the library computes a
//! circle approximating the reachable area (average speed × time) around the
//! geocoded location. It provides:
//!
//! - Parsing time budgets such as `10m`, `1.5h` or `30s`
//! - Radius computation from a fixed speed table per transport mode
//! - Input validation that runs before any network request
//! - A capped, expiring search history persisted as JSON
//! - Nominatim geocoding and GeoJSON/text map output
//!
//! # Example
//!
//! ```
//! use isochrone_viewer::models::TransportMode;
//! use isochrone_viewer::{parse_time, radius};
//!
//! let seconds = parse_time("10m")?;
//! assert_eq!(radius(TransportMode::Walking, seconds), 840.0);
//! # Ok::<(), isochrone_viewer::IsochroneError>(())
//! ```

pub mod cli;
pub mod error;
pub mod geocode;
pub mod history_store;
pub mod isochrone;
pub mod map;
pub mod models;
pub mod parsers;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use error::IsochroneError;
pub use history_store::{HistoryRepository, HistoryStore};
pub use isochrone::{Planner, radius, radius_for};
pub use models::{HistoryEntry, Isochrone, Place, RawQuery, SearchQuery, TransportMode};
pub use parsers::parse_time;
pub use validation::validate;
