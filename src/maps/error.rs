use crate::domain::CoordinateError;
use crate::polyline::PolylineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapsError {
    #[error("address must not be empty")]
    EmptyAddress,
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("no data received")]
    EmptyResponse,
    #[error("unexpected JSON structure: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("maps API responded with status {status}: {message}")]
    ApiStatus { status: String, message: String },
    #[error("no results for address '{0}'")]
    AddressNotFound(String),
    #[error("no route found")]
    NoRoute,
    #[error("invalid coordinate in response: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
    #[error("invalid route polyline: {0}")]
    InvalidPolyline(#[from] PolylineError),
}
