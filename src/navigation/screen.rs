use crate::app_config::MapView;
use crate::domain::{Marker, RouteStyle};
use crate::maps::MapsService;
use crate::navigation::map_surface::MapSurface;
use crate::navigation::route_planner::{NavigationError, PlannedRoute, plan_route};
use std::sync::Arc;
use tracing::{error, info, instrument};

const ALERT_TITLE: &str = "Error";

pub struct NavigationScreen<S: MapSurface> {
    service: Arc<dyn MapsService>,
    surface: S,
    route_style: RouteStyle,
    camera_padding: f64,
}

impl<S: MapSurface> NavigationScreen<S> {
    pub fn new(service: Arc<dyn MapsService>, surface: S, map: &MapView) -> Self {
        NavigationScreen {
            service,
            surface,
            route_style: map.route_style(),
            camera_padding: map.camera_padding(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Plans the route between both addresses and draws it, or shows the reason it could not be planned.
    #[instrument(skip(self))]
    pub async fn show_route(&mut self, start: &str, destination: &str) -> Result<PlannedRoute, NavigationError> {
        match plan_route(self.service.as_ref(), start, destination).await {
            Ok(route) => {
                self.render(&route);
                info!("🗺️ Showing route from {} to {}", route.start, route.destination);
                Ok(route)
            }
            Err(e) => {
                error!("❌ Unable to show route: {}", e);
                self.surface.show_alert(ALERT_TITLE, &e.to_string());
                Err(e)
            }
        }
    }

    fn render(&mut self, route: &PlannedRoute) {
        self.surface.draw_path(&route.path, &self.route_style);
        if let Some(bounds) = route.path.bounds() {
            self.surface.fit_camera(&bounds, self.camera_padding);
        }

        self.surface.add_marker(&Marker::start(route.start));
        self.surface.add_marker(&Marker::destination(route.destination));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, Coordinate, CoordinateBounds};
    use crate::navigation::map_surface::tests::{RecordingSurface, SurfaceCommand};
    use crate::navigation::route_planner::tests::FakeMapsService;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn screen(service: FakeMapsService) -> (Arc<FakeMapsService>, NavigationScreen<RecordingSurface>) {
        let service = Arc::new(service);
        let screen = NavigationScreen::new(service.clone(), RecordingSurface::default(), &MapView::default());
        (service, screen)
    }

    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    #[test(tokio::test)]
    async fn renders_the_path_markers_and_camera() {
        let (service, mut screen) = screen(
            FakeMapsService::default()
                .with_address("Coolsingel 40", 51.9227, 4.4791)
                .with_address("Markthal", 51.9200, 4.4866)
                .with_path(&[(51.9227, 4.4791), (51.9210, 4.4830), (51.9200, 4.4866)]),
        );

        let route = screen.show_route("Coolsingel 40", "Markthal").await.unwrap();

        assert!(!route.path.is_empty());
        assert_eq!(service.directions_calls(), 1);
        assert_eq!(
            screen.surface().commands,
            vec![
                SurfaceCommand::DrawPath(route.path.clone(), RouteStyle::default()),
                SurfaceCommand::FitCamera(
                    CoordinateBounds {
                        south_west: coordinate(51.9200, 4.4791),
                        north_east: coordinate(51.9227, 4.4866),
                    },
                    50.0
                ),
                SurfaceCommand::AddMarker(Marker::new(coordinate(51.9227, 4.4791), "Start", Color::Green)),
                SurfaceCommand::AddMarker(Marker::new(coordinate(51.9200, 4.4866), "Destination", Color::Red)),
            ]
        );
        assert_eq!(screen.surface().markers().len(), 2);
    }

    #[test(tokio::test)]
    async fn alerts_when_an_address_is_missing() {
        let (service, mut screen) = screen(FakeMapsService::default());

        let result = screen.show_route("", "Markthal").await;

        assert!(matches!(result, Err(NavigationError::MissingAddress)));
        assert!(service.geocoded.lock().unwrap().is_empty());
        assert_eq!(
            screen.surface().commands,
            vec![SurfaceCommand::ShowAlert("Error".to_string(), "Please enter both addresses.".to_string())]
        );
    }

    #[test(tokio::test)]
    async fn alerts_with_the_failing_geocode_and_draws_nothing() {
        let (service, mut screen) =
            screen(FakeMapsService::default().with_address("Coolsingel 40", 51.9227, 4.4791).with_path(&[(51.9227, 4.4791)]));

        let result = screen.show_route("Coolsingel 40", "Atlantis").await;

        assert!(result.is_err());
        assert_eq!(service.directions_calls(), 0);
        assert_eq!(
            screen.surface().commands,
            vec![SurfaceCommand::ShowAlert(
                "Error".to_string(),
                "Address 'Atlantis' couldn't be found: no results for address 'Atlantis'".to_string()
            )]
        );
    }

    #[test(tokio::test)]
    async fn alerts_when_no_route_exists() {
        let (_, mut screen) = screen(
            FakeMapsService::default()
                .with_address("Coolsingel 40", 51.9227, 4.4791)
                .with_address("Markthal", 51.9200, 4.4866),
        );

        let result = screen.show_route("Coolsingel 40", "Markthal").await;

        assert!(result.is_err());
        assert_eq!(
            screen.surface().commands,
            vec![SurfaceCommand::ShowAlert("Error".to_string(), "Unable to find a route: no route found".to_string())]
        );
    }
}
