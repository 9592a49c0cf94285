//! GeoJSON rendering of the map state
//!
//! The circle is approximated by a closed polygon whose vertices lie at the
//! requested great-circle distance from the center.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use super::{CircleHandle, MapView};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Vertices per circle polygon (excluding the closing vertex)
pub const CIRCLE_SEGMENTS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
struct Circle {
    lat: f64,
    lon: f64,
    radius_meters: f64,
}

/// Point `distance` meters from (`lat`, `lon`) along `bearing` radians,
/// returned as `[lon, lat]` degrees
fn destination(lat: f64, lon: f64, distance: f64, bearing: f64) -> Vec<f64> {
    let angular = distance / EARTH_RADIUS_METERS;
    let phi1 = lat.to_radians();
    let lambda1 = lon.to_radians();

    let phi2 =
        (phi1.sin() * angular.cos() + phi1.cos() * angular.sin() * bearing.cos()).asin();
    let lambda2 = lambda1
        + (bearing.sin() * angular.sin() * phi1.cos())
            .atan2(angular.cos() - phi1.sin() * phi2.sin());

    let lon2 = (lambda2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    vec![lon2, phi2.to_degrees()]
}

/// Closed ring approximating a circle, `[lon, lat]` positions
pub fn circle_ring(lat: f64, lon: f64, radius_meters: f64, segments: usize) -> Vec<Vec<f64>> {
    let segments = segments.max(3);
    let mut ring: Vec<Vec<f64>> = (0..segments)
        .map(|i| {
            let bearing = 2.0 * PI * (i as f64) / (segments as f64);
            destination(lat, lon, radius_meters, bearing)
        })
        .collect();
    let first = ring[0].clone();
    ring.push(first);
    ring
}

fn feature(geometry: Value, properties: serde_json::Value) -> Feature {
    let properties: Option<JsonObject> = match properties {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    };
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties,
        foreign_members: None,
    }
}

/// [`MapView`] that collects what would be drawn and exports it as GeoJSON
#[derive(Debug, Default)]
pub struct GeoJsonMapView {
    center: Option<(f64, f64, u8)>,
    label: Option<String>,
    circles: BTreeMap<u64, Circle>,
    next_id: u64,
}

impl GeoJsonMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    /// Center point (if any) followed by one polygon per live circle
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut features = Vec::new();

        if let Some((lat, lon, zoom)) = self.center {
            features.push(feature(
                Value::Point(vec![lon, lat]),
                json!({ "kind": "center", "zoom": zoom, "label": self.label }),
            ));
        }

        for circle in self.circles.values() {
            let ring = circle_ring(circle.lat, circle.lon, circle.radius_meters, CIRCLE_SEGMENTS);
            features.push(feature(
                Value::Polygon(vec![ring]),
                json!({ "kind": "isochrone", "radius_meters": circle.radius_meters }),
            ));
        }

        FeatureCollection { bbox: None, features, foreign_members: None }
    }

    pub fn to_geojson_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_feature_collection())
            .context("Failed to serialize GeoJSON")
    }
}

impl MapView for GeoJsonMapView {
    fn center_on(&mut self, lat: f64, lon: f64, zoom: u8) {
        self.center = Some((lat, lon, zoom));
    }

    fn draw_circle(&mut self, lat: f64, lon: f64, radius_meters: f64) -> CircleHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.circles.insert(id, Circle { lat, lon, radius_meters });
        CircleHandle(id)
    }

    fn remove_circle(&mut self, handle: CircleHandle) {
        self.circles.remove(&handle.0);
    }

    fn annotate(&mut self, _lat: f64, _lon: f64, label: &str) {
        self.label = Some(label.to_string());
    }
}
