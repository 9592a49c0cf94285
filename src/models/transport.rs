use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IsochroneError;

/// Transport modes with a fixed average speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Walking,
    Cycling,
    Driving,
    Bus,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] =
        [TransportMode::Walking, TransportMode::Cycling, TransportMode::Driving, TransportMode::Bus];

    /// Key used in user input and in persisted history
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::Driving => "driving",
            TransportMode::Bus => "bus",
        }
    }

    /// Average speed in meters per second
    pub fn speed_mps(&self) -> f64 {
        match self {
            TransportMode::Walking => 1.4,
            TransportMode::Cycling => 5.5,
            TransportMode::Driving => 13.9,
            TransportMode::Bus => 8.0,
        }
    }

    /// Comma separated list of accepted keys, for error messages
    pub fn valid_keys() -> String {
        Self::ALL.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for TransportMode {
    type Err = IsochroneError;

    /// Keys are matched exactly ("Walking" is rejected)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| IsochroneError::UnknownTransport(s.to_string()))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
