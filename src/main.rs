use crate::app_config::AppConfig;
use crate::maps::GoogleMapsService;
use crate::navigation::NavigationScreen;
use crate::terminal_map::TerminalMap;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

mod app_config;
mod domain;
mod maps;
mod navigation;
mod polyline;
mod terminal_map;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");
    if config.maps().api_key().is_empty() {
        warn!("⚠️ No maps API key configured, requests will be denied");
    }

    let client = maps::new_client()?;
    let service = Arc::new(GoogleMapsService::new(client, config.clone()));
    let mut screen = NavigationScreen::new(service, TerminalMap::new(std::io::stdout()), config.map());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let start = prompt(&mut lines, "Enter starting address").await?;
    let destination = prompt(&mut lines, "Enter destination address").await?;

    screen.show_route(&start, &destination).await?;

    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, placeholder: &str) -> std::io::Result<String> {
    println!("{}:", placeholder);
    Ok(lines.next_line().await?.unwrap_or_default())
}
