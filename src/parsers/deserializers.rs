use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for history timestamps
///
/// Accepts integer milliseconds (what the store writes), float milliseconds
/// (truncated) and RFC3339 strings.
pub fn deserialize_timestamp_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            if let Some(ms) = n.as_i64() {
                return Ok(ms);
            }
            let ms = n.as_f64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
                return Err(Error::custom("timestamp out of range"));
            }
            Ok(ms.trunc() as i64)
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map(|dt| dt.timestamp_millis())
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Flexible coordinate deserializer: Nominatim sends `"48.85"`, other
/// geocoders send `48.85`
pub fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::custom("invalid coordinate")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::custom(format!("invalid coordinate '{}': {}", s, e))),
        _ => Err(Error::custom("coordinate must be a number or string")),
    }
}
