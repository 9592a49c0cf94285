//! Map output
//!
//! [`MapView`] is what the planner draws on: center the view, draw the
//! reachable-area circle, remove the previous one. Two views ship with the
//! crate:
//!
//! - [`TextMapView`]: a short textual summary for the terminal
//! - [`GeoJsonMapView`]: a GeoJSON FeatureCollection for any map viewer

pub mod geojson_view;
pub mod text_view;

pub use geojson_view::{CIRCLE_SEGMENTS, GeoJsonMapView, circle_ring};
pub use text_view::TextMapView;

use crate::isochrone::format_radius;
use crate::models::Isochrone;
use crate::utils::sanitize_line;

/// Zoom level used when centering on a result
pub const RESULT_ZOOM: u8 = 13;

/// Opaque reference to a drawn circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleHandle(pub u64);

pub trait MapView {
    fn center_on(&mut self, lat: f64, lon: f64, zoom: u8);

    fn draw_circle(&mut self, lat: f64, lon: f64, radius_meters: f64) -> CircleHandle;

    fn remove_circle(&mut self, handle: CircleHandle);

    /// Attach a text label at a position; views without labels ignore it
    fn annotate(&mut self, _lat: f64, _lon: f64, _label: &str) {}
}

/// A view plus the circle currently shown on it
///
/// Showing a new result replaces the previous circle, so at most one
/// isochrone is visible at a time.
#[derive(Debug)]
pub struct MapSession<V> {
    view: V,
    current: Option<CircleHandle>,
}

impl<V: MapView> MapSession<V> {
    pub fn new(view: V) -> Self {
        Self { view, current: None }
    }

    pub fn show(&mut self, isochrone: &Isochrone) {
        let place = &isochrone.place;
        self.view.center_on(place.lat, place.lon, RESULT_ZOOM);

        if let Some(previous) = self.current.take() {
            self.view.remove_circle(previous);
        }
        self.current = Some(self.view.draw_circle(place.lat, place.lon, isochrone.radius_meters));

        let label = format!(
            "{} ({}, {})\n{}",
            sanitize_line(&place.display_name),
            isochrone.transport,
            isochrone.time,
            format_radius(isochrone.radius_meters)
        );
        self.view.annotate(place.lat, place.lon, &label);
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Place, TransportMode};

    fn isochrone(radius_meters: f64) -> Isochrone {
        Isochrone {
            place: Place::new("Paris", 48.8566, 2.3522).unwrap(),
            transport: TransportMode::Walking,
            time: "10m".to_string(),
            seconds: 600.0,
            radius_meters,
        }
    }

    #[test]
    fn test_show_replaces_previous_circle() {
        let mut session = MapSession::new(GeoJsonMapView::new());
        session.show(&isochrone(840.0));
        session.show(&isochrone(1680.0));

        assert_eq!(session.view().circle_count(), 1);
        let fc = session.view().to_feature_collection();
        assert_eq!(fc.features[1].property("radius_meters"), Some(&serde_json::json!(1680.0)));
    }

    #[test]
    fn test_show_labels_result() {
        let mut session = MapSession::new(TextMapView::new());
        session.show(&isochrone(840.0));
        let text = session.into_view().render();
        assert!(text.starts_with("Paris (walking, 10m)\n~ 0.84km radius"));
        assert!(text.contains("Lat: 48.856600"));
    }
}
