use crate::app_config::AppConfig;
use crate::domain::{Coordinate, Path};
use crate::maps::{MapsError, directions, geocoding};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

#[async_trait]
pub trait MapsService: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinate, MapsError>;

    async fn directions(&self, origin: Coordinate, destination: Coordinate) -> Result<Path, MapsError>;
}

#[derive(Debug)]
pub struct GoogleMapsService {
    client: Client,
    config: Arc<AppConfig>,
}

impl GoogleMapsService {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        GoogleMapsService { client, config }
    }
}

#[async_trait]
impl MapsService for GoogleMapsService {
    async fn geocode(&self, address: &str) -> Result<Coordinate, MapsError> {
        geocoding::geocode(&self.client, &self.config, address).await
    }

    async fn directions(&self, origin: Coordinate, destination: Coordinate) -> Result<Path, MapsError> {
        directions::directions(&self.client, &self.config, origin, destination).await
    }
}
