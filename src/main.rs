//! Suggest-RS service entry point

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use suggest_rs::config::Settings;
use suggest_rs::web::{create_router, AppState};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = load_settings()?;

    // Initialize logging
    let level = if settings.general.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .init();

    info!("Starting Suggest-RS v{}", suggest_rs::VERSION);
    info!(
        "Serving suggestions from index '{}' for {} context nodes",
        settings.search.index,
        settings.repository.nodes.len()
    );

    // Create application state
    let state = AppState::new(settings.clone())?;

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("SUGGEST_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/suggest-rs/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("suggest-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
