use super::{CircleHandle, MapView};

/// [`MapView`] that describes the map state as plain text lines
#[derive(Debug, Default)]
pub struct TextMapView {
    lines: Vec<String>,
    next_id: u64,
}

impl TextMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl MapView for TextMapView {
    fn center_on(&mut self, lat: f64, lon: f64, zoom: u8) {
        self.lines.push(format!("Lat: {:.6}", lat));
        self.lines.push(format!("Lon: {:.6}", lon));
        self.lines.push(format!("Zoom: {}", zoom));
    }

    fn draw_circle(&mut self, _lat: f64, _lon: f64, radius_meters: f64) -> CircleHandle {
        let handle = CircleHandle(self.next_id);
        self.next_id += 1;
        self.lines.push(crate::isochrone::format_radius(radius_meters));
        handle
    }

    fn remove_circle(&mut self, _handle: CircleHandle) {}

    fn annotate(&mut self, _lat: f64, _lon: f64, label: &str) {
        self.lines.insert(0, label.to_string());
    }
}
