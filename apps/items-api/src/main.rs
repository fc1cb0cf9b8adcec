//! Items API - in-memory item CRUD over HTTP/JSON

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        name = config.app.name,
        version = config.app.version,
        address = %config.server.address(),
        "Starting Items API"
    );

    let app = api::app(config.app);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
