use crate::domain::{CoordinateBounds, Marker, Path, RouteStyle};

/// Whatever draws the map: route overlays, markers, the camera and modal alerts.
pub trait MapSurface {
    fn draw_path(&mut self, path: &Path, style: &RouteStyle);

    fn add_marker(&mut self, marker: &Marker);

    fn fit_camera(&mut self, bounds: &CoordinateBounds, padding: f64);

    fn show_alert(&mut self, title: &str, message: &str);
}
