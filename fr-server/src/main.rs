use fr_client::UpstreamClient;
use fr_config::Config;
use fr_server::{AppState, build_router, logger};
use fr_store::MemoryRegistrationStore;

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Build the in-memory store and the upstream client
    let store =
        MemoryRegistrationStore::new().with_trash_actor(config.store.trash_actor.clone());
    warn!("Registration store is in-memory: data is lost on shutdown");

    let upstream = UpstreamClient::new(
        &config.upstream.base_url,
        config.upstream.api_token.as_deref(),
        Duration::from_secs(config.upstream.timeout_secs),
    )?;

    // Build application state and router
    let state = AppState::new(Box::new(store), upstream);
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on ctrl-c
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
