mod color;
mod coordinate;
mod marker;
mod path;
mod travel_mode;

pub use color::Color;
pub use coordinate::{Coordinate, CoordinateError};
pub use marker::{Marker, RouteStyle};
pub use path::{CoordinateBounds, Path};
pub use travel_mode::TravelMode;
