//! Parsers for user input and persisted data
//!
//! - [`time`]: time budgets such as `10m`, `1.5h` or `30s`
//! - [`deserializers`]: lenient serde helpers for timestamps and coordinates
//!
//! Parse failures are reported as typed [`IsochroneError`](crate::error::IsochroneError)
//! values; nothing here panics on bad input.

pub mod deserializers;
pub mod time;

pub use time::{TimeBudget, TimeUnit, format_duration, is_valid_time, parse_time, parse_time_budget};
