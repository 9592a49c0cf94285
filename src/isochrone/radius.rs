//! Reachable radius from a transport mode and a time budget.
//!
//! The radius is a straight-line approximation: average speed times travel
//! time, with no routing involved.

use crate::error::IsochroneError;
use crate::models::TransportMode;

/// Radius in meters reachable within `seconds` using `transport`
pub fn radius(transport: TransportMode, seconds: f64) -> f64 {
    transport.speed_mps() * seconds
}

/// Radius for a transport given by its string key
///
/// Unlike [`radius`] this can be called with unchecked input, so unknown keys
/// are reported as [`IsochroneError::UnknownTransport`].
pub fn radius_for(transport: &str, seconds: f64) -> Result<f64, IsochroneError> {
    let mode: TransportMode = transport.parse()?;
    Ok(radius(mode, seconds))
}

/// Format a radius the way results are labelled: "~ 0.84km radius"
pub fn format_radius(meters: f64) -> String {
    format!("~ {:.2}km radius", meters / 1000.0)
}
