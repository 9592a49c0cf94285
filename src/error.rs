//! Typed errors for the isochrone core.
//!
//! Every failure the core can report is a variant of [`IsochroneError`]. None of
//! them are fatal: the CLI decides how each one is presented (inline message,
//! non-zero exit, retry hint).

use thiserror::Error;

use crate::geocode::GeocodeError;

/// Errors surfaced by validation, parsing, radius computation and geocoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsochroneError {
    /// A user-supplied field failed validation
    #[error("Invalid {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// The time string does not match `<number><h|m|s>`
    #[error("Invalid time format: '{0}' (expected e.g. 10m, 1.5h, or 30s)")]
    InvalidFormat(String),

    /// Transport key outside the speed table
    #[error("Unknown transport mode: '{0}'")]
    UnknownTransport(String),

    /// The geocoder returned no result
    #[error("Location not found: {0}")]
    NotFound(String),

    /// The geocoder could not be reached or answered with garbage
    #[error("Geocoding failed: {0}")]
    Network(String),
}

impl IsochroneError {
    /// Shorthand for a [`IsochroneError::ValidationFailed`]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationFailed { field: field.to_string(), message: message.into() }
    }

    /// Field name for validation failures, `None` otherwise
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Network(_))
    }
}

impl From<GeocodeError> for IsochroneError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound(query) => Self::NotFound(query),
            GeocodeError::EmptyQuery => {
                Self::validation("location", crate::validation::LOCATION_REQUIRED)
            }
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_exposes_field() {
        let err = IsochroneError::validation("location", "Location is required");
        assert_eq!(err.field(), Some("location"));
        assert_eq!(err.to_string(), "Invalid location: Location is required");
    }

    #[test]
    fn test_non_validation_errors_have_no_field() {
        assert_eq!(IsochroneError::InvalidFormat("10x".to_string()).field(), None);
        assert_eq!(IsochroneError::UnknownTransport("plane".to_string()).field(), None);
    }

    #[test]
    fn test_retryable_errors() {
        assert!(IsochroneError::NotFound("Atlantis".to_string()).is_retryable());
        assert!(IsochroneError::Network("timeout".to_string()).is_retryable());
        assert!(!IsochroneError::InvalidFormat("x".to_string()).is_retryable());
        assert!(!IsochroneError::validation("time", "bad").is_retryable());
    }

    #[test]
    fn test_geocode_error_conversion() {
        let err: IsochroneError = GeocodeError::NotFound("Atlantis".to_string()).into();
        assert_eq!(err, IsochroneError::NotFound("Atlantis".to_string()));

        let err: IsochroneError = GeocodeError::Timeout.into();
        assert!(matches!(err, IsochroneError::Network(msg) if msg.contains("timed out")));

        let err: IsochroneError = GeocodeError::EmptyQuery.into();
        assert_eq!(err.field(), Some("location"));
    }
}
