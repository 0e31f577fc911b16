use crate::app_config::AppConfig;
use crate::domain::{Coordinate, Path};
use crate::maps::MapsError;
use crate::maps::domain::DirectionsResponse;
use crate::maps::request::{check_status, endpoint_url, get_json, required};
use crate::polyline;
use reqwest::Client;
use tracing::{info, instrument};

#[instrument(skip_all, fields(origin = %origin, destination = %destination))]
pub async fn directions(client: &Client, config: &AppConfig, origin: Coordinate, destination: Coordinate) -> Result<Path, MapsError> {
    let mode = config.maps().travel_mode();
    info!("Requesting {} directions...", mode.as_query_value());

    let (origin, destination) = (origin.to_string(), destination.to_string());
    let url = endpoint_url(
        config.maps().base_url(),
        "directions/json",
        &[
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
            ("mode", mode.as_query_value()),
            ("key", config.maps().api_key()),
        ],
    )?;
    let response = get_json::<DirectionsResponse>(client, url).await?;
    check_status(response.status.as_deref(), response.error_message.as_deref())?;

    let route = required(response.routes, "routes")?.into_iter().next().ok_or(MapsError::NoRoute)?;
    let path = polyline::decode(&route.overview_polyline.points)?;
    if path.is_empty() {
        return Err(MapsError::NoRoute);
    }

    info!("Requesting {} directions... OK, {} points", mode.as_query_value(), path.len());
    Ok(path)
}
