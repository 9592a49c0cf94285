use serde::{Deserialize, Serialize};

use super::transport::TransportMode;

/// Unvalidated search input, exactly as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    pub location: String,
    pub transport: String,
    pub time: String,
}

impl RawQuery {
    pub fn new(
        location: impl Into<String>,
        transport: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self { location: location.into(), transport: transport.into(), time: time.into() }
    }
}

/// A search that passed validation
///
/// Only [`crate::validation::validate`] constructs this type, so holding one
/// means the location is non-empty, the transport is known and the time string
/// is well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    location: String,
    transport: TransportMode,
    time: String,
    seconds: f64,
}

impl SearchQuery {
    pub(crate) fn new(location: String, transport: TransportMode, time: String, seconds: f64) -> Self {
        Self { location, transport, time, seconds }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn transport(&self) -> TransportMode {
        self.transport
    }

    /// Time budget as entered ("10m")
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Time budget converted to seconds
    pub fn seconds(&self) -> f64 {
        self.seconds
    }
}
