use crate::domain::{Color, RouteStyle, TravelMode};
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    maps: Maps,
    #[serde(default)]
    map: MapView,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ROUTE_FINDER").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn maps(&self) -> &Maps {
        &self.maps
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }
}

#[derive(Debug, Deserialize)]
pub struct Maps {
    base_url: String,
    api_key: String,
    #[serde(default)]
    travel_mode: TravelMode,
}

impl Maps {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MapView {
    camera_padding: f64,
    route_color: Color,
    route_width: f64,
}

impl MapView {
    pub fn camera_padding(&self) -> f64 {
        self.camera_padding
    }

    pub fn route_style(&self) -> RouteStyle {
        RouteStyle {
            stroke_color: self.route_color,
            stroke_width: self.route_width,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        let style = RouteStyle::default();
        MapView {
            camera_padding: 50.0,
            route_color: style.stroke_color,
            route_width: style.stroke_width,
        }
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                maps: Maps {
                    base_url: "https://maps.url/maps/api".to_string(),
                    api_key: "key".to_string(),
                    travel_mode: TravelMode::Walking,
                },
                map: MapView::default(),
            },
        }
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.config.maps.base_url = url;
        self
    }

    pub fn travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.config.maps.travel_mode = travel_mode;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
