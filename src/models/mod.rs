//! Data models for the isochrone viewer.
//!
//! - [`RawQuery`] - Unvalidated user input
//! - [`SearchQuery`] - Validated search, only produced by the validator
//! - [`TransportMode`] - Transport modes and their average speeds
//! - [`HistoryEntry`] - One persisted past search
//! - [`Place`] / [`Isochrone`] - Geocoded location and the computed result
//!
//! History timestamps use a custom deserializer from the `parsers::deserializers`
//! module so older files with RFC3339 strings still load.

pub mod history;
pub mod place;
pub mod query;
pub mod transport;

pub use history::{HistoryEntry, NewHistoryEntry, RETENTION_MILLIS};
pub use place::{Isochrone, Place};
pub use query::{RawQuery, SearchQuery};
pub use transport::TransportMode;
