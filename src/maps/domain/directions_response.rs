use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    pub routes: Option<Vec<Route>>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}
