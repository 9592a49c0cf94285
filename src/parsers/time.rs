//! Time budget parser.
//!
//! # Syntax
//!
//! ```text
//! time   := number unit
//! number := digit+ ("." digit+)?
//! unit   := h | m | s   (case-insensitive)
//! ```
//!
//! Nothing else is allowed: no whitespace, no sign, no exponent, exactly one
//! unit letter at the end.
//!
//! # Examples
//!
//! ```rust
//! # use isochrone_viewer::parsers::time::parse_time;
//! assert_eq!(parse_time("1.5h").unwrap(), 5400.0);
//! assert_eq!(parse_time("10m").unwrap(), 600.0);
//! assert_eq!(parse_time("30S").unwrap(), 30.0);
//! assert!(parse_time("10").is_err());
//! ```

use std::fmt;

use crate::error::IsochroneError;

/// Unit suffix of a time budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'h' => Some(TimeUnit::Hours),
            'm' => Some(TimeUnit::Minutes),
            's' => Some(TimeUnit::Seconds),
            _ => None,
        }
    }

    pub fn seconds_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Hours => 3600.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Seconds => 1.0,
        }
    }
}

/// Parsed time budget, value and unit kept apart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBudget {
    pub value: f64,
    pub unit: TimeUnit,
}

impl TimeBudget {
    pub fn seconds(&self) -> f64 {
        self.value * self.unit.seconds_per_unit()
    }
}

/// Check that `digits` is one or more ASCII digits, optionally followed by a
/// dot and one or more ASCII digits
fn is_valid_number(digits: &str) -> bool {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    all_digits(integer) && fraction.is_none_or(all_digits)
}

/// Parse a time string into its value and unit
pub fn parse_time_budget(input: &str) -> Result<TimeBudget, IsochroneError> {
    let invalid = || IsochroneError::InvalidFormat(input.to_string());

    let mut chars = input.chars();
    let unit = chars.next_back().and_then(TimeUnit::from_char).ok_or_else(invalid)?;
    let number = chars.as_str();

    if !is_valid_number(number) {
        return Err(invalid());
    }

    let value: f64 = number.parse().map_err(|_| invalid())?;

    Ok(TimeBudget { value, unit })
}

/// Parse a time string ("10m", "1.5h", "30s") into seconds
pub fn parse_time(input: &str) -> Result<f64, IsochroneError> {
    parse_time_budget(input).map(|budget| budget.seconds())
}

/// Whether `input` is a well formed time budget
pub fn is_valid_time(input: &str) -> bool {
    parse_time_budget(input).is_ok()
}

/// Human readable duration: "1h 30m", "10m", "45s"
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return format!("{}s", seconds);
    }

    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{}s", secs));
    }
    parts.join(" ")
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            TimeUnit::Hours => 'h',
            TimeUnit::Minutes => 'm',
            TimeUnit::Seconds => 's',
        };
        write!(f, "{}{}", self.value, suffix)
    }
}
