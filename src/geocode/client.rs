//! Nominatim geocoding client
//!
//! Resolves a free-form location to coordinates with a single
//! `GET /search?q=...&format=json&limit=1` request. The first result wins; an
//! empty array means the location is unknown.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::config::GeocodeConfig;
use crate::models::Place;

/// Errors that can occur during geocoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be understood
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// No result for the query
    #[error("Location not found: {0}")]
    NotFound(String),

    /// Query was blank
    #[error("Geocoding query must not be empty")]
    EmptyQuery,

    /// No answer within the configured timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

impl GeocodeError {
    /// Returns true if the same request may succeed later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout | Self::NotFound(_)
        )
    }
}

/// Resolves free text to a [`Place`]
pub trait GeocodeClient {
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError>;
}

/// One element of Nominatim's JSON array
#[derive(Debug, Deserialize)]
struct NominatimResult {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_coordinate")]
    lat: f64,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_coordinate")]
    lon: f64,
    #[serde(default)]
    display_name: Option<String>,
}

/// Blocking Nominatim client
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    config: GeocodeConfig,
}

impl NominatimClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                GeocodeError::ConnectionFailed(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }
}

/// Turn a decoded response into the first place, or `NotFound`
fn first_place(results: Vec<NominatimResult>, query: &str) -> Result<Place, GeocodeError> {
    let result =
        results.into_iter().next().ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
    let display_name = result.display_name.unwrap_or_else(|| query.to_string());

    Place::new(display_name, result.lat, result.lon).map_err(GeocodeError::ParseError)
}

impl GeocodeClient for NominatimClient {
    #[instrument(skip(self))]
    fn geocode(&self, query: &str) -> Result<Place, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = self.config.search_url();
        debug!(%url, "Geocoding location");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::Timeout
                } else {
                    GeocodeError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodeError::RequestFailed(format!("HTTP {}", response.status())));
        }

        let results: Vec<NominatimResult> =
            response.json().map_err(|e| GeocodeError::ParseError(e.to_string()))?;

        let place = first_place(results, query)?;
        debug!(lat = place.lat, lon = place.lon, "Geocoded location");
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<NominatimResult> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_result_wins() {
        let results = parse(
            r#"[{"lat":"48.8566","lon":"2.3522","display_name":"Paris, France"},
                {"lat":"33.66","lon":"-95.55","display_name":"Paris, Texas"}]"#,
        );
        let place = first_place(results, "Paris").unwrap();
        assert_eq!(place, Place::new("Paris, France", 48.8566, 2.3522).unwrap());
    }

    #[test]
    fn test_numeric_coordinates() {
        let results = parse(r#"[{"lat":52.52,"lon":13.405,"display_name":"Berlin"}]"#);
        let place = first_place(results, "Berlin").unwrap();
        assert_eq!(place.lat, 52.52);
        assert_eq!(place.lon, 13.405);
    }

    #[test]
    fn test_missing_display_name_falls_back_to_query() {
        let results = parse(r#"[{"lat":"1","lon":"2"}]"#);
        assert_eq!(first_place(results, "somewhere").unwrap().display_name, "somewhere");
    }

    #[test]
    fn test_empty_result_is_not_found() {
        assert_eq!(
            first_place(parse("[]"), "Atlantis"),
            Err(GeocodeError::NotFound("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_coordinates_are_parse_errors() {
        let results = parse(r#"[{"lat":"123","lon":"2","display_name":"Nowhere"}]"#);
        assert!(matches!(first_place(results, "x"), Err(GeocodeError::ParseError(_))));
    }

    #[test]
    fn test_blank_query_is_rejected_without_request() {
        let client = NominatimClient::new(GeocodeConfig::default()).unwrap();
        assert_eq!(client.geocode("   "), Err(GeocodeError::EmptyQuery));
    }

    #[test]
    fn test_retryable_errors() {
        assert!(GeocodeError::Timeout.is_retryable());
        assert!(GeocodeError::ConnectionFailed("refused".to_string()).is_retryable());
        assert!(!GeocodeError::ParseError("bad json".to_string()).is_retryable());
        assert!(!GeocodeError::EmptyQuery.is_retryable());
    }
}
