mod client;
mod directions;
mod domain;
mod error;
mod geocoding;
mod request;
mod service;

pub use client::new_client;
pub use error::MapsError;
pub use service::{GoogleMapsService, MapsService};
