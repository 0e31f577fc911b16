use crate::domain::{Color, Coordinate};

#[derive(Clone, PartialEq, Debug)]
pub struct Marker {
    pub position: Coordinate,
    pub label: String,
    pub color: Color,
}

impl Marker {
    pub fn new(position: Coordinate, label: impl Into<String>, color: Color) -> Self {
        Marker {
            position,
            label: label.into(),
            color,
        }
    }

    pub fn start(position: Coordinate) -> Self {
        Marker::new(position, "Start", Color::Green)
    }

    pub fn destination(position: Coordinate) -> Self {
        Marker::new(position, "Destination", Color::Red)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RouteStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl Default for RouteStyle {
    fn default() -> Self {
        RouteStyle {
            stroke_color: Color::Blue,
            stroke_width: 5.0,
        }
    }
}
