use crate::domain::{CoordinateBounds, Marker, Path, RouteStyle};
use crate::navigation::MapSurface;
use std::io::Write;
use tracing::warn;

/// Renders map commands as plain text lines.
#[derive(Debug)]
pub struct TerminalMap<W: Write> {
    out: W,
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W) -> Self {
        TerminalMap { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, line: String) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("⚠️ Unable to write to the terminal: {}", e);
        }
    }
}

impl<W: Write> MapSurface for TerminalMap<W> {
    fn draw_path(&mut self, path: &Path, style: &RouteStyle) {
        self.print(format!("Route ({} {}px, {} points):", style.stroke_color.to_hex(), style.stroke_width, path.len()));
        for point in path.iter() {
            self.print(format!("  {}", point));
        }
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.print(format!("Marker '{}' ({}) at {}", marker.label, marker.color, marker.position));
    }

    fn fit_camera(&mut self, bounds: &CoordinateBounds, padding: f64) {
        self.print(format!("Camera fit to {} .. {} with padding {}", bounds.south_west, bounds.north_east, padding));
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        self.print(format!("{}: {}", title, message));
    }
}
