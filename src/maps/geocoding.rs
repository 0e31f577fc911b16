use crate::app_config::AppConfig;
use crate::domain::Coordinate;
use crate::maps::MapsError;
use crate::maps::domain::GeocodeResponse;
use crate::maps::request::{check_status, endpoint_url, get_json, required};
use reqwest::Client;
use tracing::{info, instrument};

#[instrument(skip(client, config))]
pub async fn geocode(client: &Client, config: &AppConfig, address: &str) -> Result<Coordinate, MapsError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(MapsError::EmptyAddress);
    }

    info!("Geocoding '{}'...", address);

    let url = endpoint_url(config.maps().base_url(), "geocode/json", &[("address", address), ("key", config.maps().api_key())])?;
    let response = get_json::<GeocodeResponse>(client, url).await?;
    check_status(response.status.as_deref(), response.error_message.as_deref())?;

    let location = required(response.results, "results")?
        .into_iter()
        .next()
        .map(|result| result.geometry.location)
        .ok_or_else(|| MapsError::AddressNotFound(address.to_string()))?;

    let coordinate = Coordinate::new(location.lat, location.lng)?;
    info!("Geocoding '{}'... OK, found {}", address, coordinate);

    Ok(coordinate)
}
