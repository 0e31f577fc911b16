use crate::domain::{Coordinate, Path};
use crate::maps::{MapsError, MapsService};
use futures::future::join;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Clone, PartialEq, Debug)]
pub struct PlannedRoute {
    pub start: Coordinate,
    pub destination: Coordinate,
    pub path: Path,
}

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Please enter both addresses.")]
    MissingAddress,
    #[error("Address '{address}' couldn't be found: {source}")]
    Geocoding {
        address: String,
        #[source]
        source: MapsError,
    },
    #[error("Unable to find a route: {0}")]
    Directions(#[source] MapsError),
}

/// Geocodes both addresses concurrently and, once both are known, fetches the route between them.
///
/// Both lookups always run to completion. When one or both fail, the error that arrived first is
/// returned and no directions are requested.
#[instrument(skip(service))]
pub async fn plan_route(service: &dyn MapsService, start: &str, destination: &str) -> Result<PlannedRoute, NavigationError> {
    let (start, destination) = (start.trim(), destination.trim());
    if start.is_empty() || destination.is_empty() {
        return Err(NavigationError::MissingAddress);
    }

    let completed = AtomicUsize::new(0);
    let ((start_order, start_result), (destination_order, destination_result)) =
        join(lookup(service, start, &completed), lookup(service, destination, &completed)).await;

    let (start_coordinate, destination_coordinate) = match (start_result, destination_result) {
        (Ok(start_coordinate), Ok(destination_coordinate)) => (start_coordinate, destination_coordinate),
        (Err(error), Ok(_)) | (Ok(_), Err(error)) => return Err(error),
        (Err(start_error), Err(destination_error)) => {
            return Err(if start_order < destination_order { start_error } else { destination_error });
        }
    };

    let path = service
        .directions(start_coordinate, destination_coordinate)
        .await
        .map_err(NavigationError::Directions)?;
    info!("✅  Planned a route of {} points", path.len());

    Ok(PlannedRoute {
        start: start_coordinate,
        destination: destination_coordinate,
        path,
    })
}

async fn lookup(service: &dyn MapsService, address: &str, completed: &AtomicUsize) -> (usize, Result<Coordinate, NavigationError>) {
    let result = service.geocode(address).await.map_err(|source| {
        warn!("⚠️ Unable to geocode '{}': {}", address, source);
        NavigationError::Geocoding {
            address: address.to_string(),
            source,
        }
    });

    (completed.fetch_add(1, Ordering::SeqCst), result)
}
