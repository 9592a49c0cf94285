use serde::{Deserialize, Serialize};

use super::transport::TransportMode;

/// A geocoded location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    /// Builds a place, rejecting coordinates outside the valid lat/lon ranges
    pub fn new(display_name: impl Into<String>, lat: f64, lon: f64) -> Result<Self, String> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude out of range: {}", lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude out of range: {}", lon));
        }
        Ok(Self { display_name: display_name.into(), lat, lon })
    }
}

/// Renderable result: a place plus the reachable radius around it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Isochrone {
    pub place: Place,
    pub transport: TransportMode,
    pub time: String,
    pub seconds: f64,
    pub radius_meters: f64,
}
