//! Geocoding: free-text location to coordinates
//!
//! [`GeocodeClient`] is the seam the planner depends on; [`NominatimClient`] is
//! the production implementation talking to OpenStreetMap's Nominatim API,
//! optionally through a CORS proxy.

pub mod client;
pub mod config;

pub use client::{GeocodeClient, GeocodeError, NominatimClient};
pub use config::GeocodeConfig;
