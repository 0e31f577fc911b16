mod directions_response;
mod geocode_response;

pub use directions_response::DirectionsResponse;
pub use geocode_response::GeocodeResponse;
