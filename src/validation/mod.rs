//! Input validation for search queries.
//!
//! [`validate`] is the single gate between raw user input and anything that
//! talks to the network. Rules are checked in order and the first failure is
//! returned:
//!
//! 1. `location` must be non-empty after trimming
//! 2. `transport` must be one of `walking`, `cycling`, `driving`, `bus`
//! 3. `time` must match `<number><h|m|s>`

use crate::error::IsochroneError;
use crate::models::{RawQuery, SearchQuery, TransportMode};
use crate::parsers::parse_time;

pub const LOCATION_REQUIRED: &str = "Location is required";
pub const TIME_FORMAT_MESSAGE: &str = "Time should be in format: 10m, 1.5h, or 30s";

/// Validate raw input into a [`SearchQuery`]
pub fn validate(raw: &RawQuery) -> Result<SearchQuery, IsochroneError> {
    let location = raw.location.trim();
    if location.is_empty() {
        return Err(IsochroneError::validation("location", LOCATION_REQUIRED));
    }

    let transport: TransportMode = raw.transport.parse().map_err(|_| {
        IsochroneError::validation(
            "transport",
            format!(
                "Unknown transport mode '{}' (valid modes: {})",
                raw.transport,
                TransportMode::valid_keys()
            ),
        )
    })?;

    let seconds =
        parse_time(&raw.time).map_err(|_| IsochroneError::validation("time", TIME_FORMAT_MESSAGE))?;

    Ok(SearchQuery::new(location.to_string(), transport, raw.time.clone(), seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let query = validate(&RawQuery::new("Paris", "walking", "10m")).unwrap();
        assert_eq!(query.location(), "Paris");
        assert_eq!(query.transport(), TransportMode::Walking);
        assert_eq!(query.time(), "10m");
        assert_eq!(query.seconds(), 600.0);
    }

    #[test]
    fn test_location_is_trimmed() {
        let query = validate(&RawQuery::new("  Berlin Hbf \n", "bus", "1h")).unwrap();
        assert_eq!(query.location(), "Berlin Hbf");
    }

    #[test]
    fn test_empty_location_fails() {
        let err = validate(&RawQuery::new("", "walking", "10m")).unwrap_err();
        assert_eq!(err.field(), Some("location"));
    }

    #[test]
    fn test_whitespace_location_fails() {
        let err = validate(&RawQuery::new("   \t", "walking", "10m")).unwrap_err();
        assert_eq!(err, IsochroneError::validation("location", LOCATION_REQUIRED));
    }

    #[test]
    fn test_unknown_transport_fails() {
        let err = validate(&RawQuery::new("Paris", "plane", "10m")).unwrap_err();
        assert_eq!(err.field(), Some("transport"));
        assert!(err.to_string().contains("plane"));
    }

    #[test]
    fn test_bad_time_fails_with_format_message() {
        let err = validate(&RawQuery::new("Paris", "walking", "ten")).unwrap_err();
        assert_eq!(err, IsochroneError::validation("time", TIME_FORMAT_MESSAGE));
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate(&RawQuery::new("", "plane", "bad")).unwrap_err();
        assert_eq!(err.field(), Some("location"));

        let err = validate(&RawQuery::new("Paris", "plane", "bad")).unwrap_err();
        assert_eq!(err.field(), Some("transport"));
    }
}
