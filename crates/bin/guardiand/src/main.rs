//! # guardiand: backup guardian card daemon
//!
//! Composition root that wires the card service, renderer and HTTP adapter
//! together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Register the status card descriptor with the card registry
//! - Construct the card service, injecting the askama renderer via its port
//! - Build the axum router, injecting the card service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no card logic belongs here.

mod config;

use guardian_adapter_http_axum::render::AskamaRenderer;
use guardian_adapter_http_axum::router;
use guardian_adapter_http_axum::state::AppState;
use guardian_app::registry::{CardDescriptor, CardRegistry};
use guardian_app::services::card_service::CardService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Registry
    let mut registry = CardRegistry::new();
    registry.register(CardDescriptor::status_card())?;

    // Card
    let card_config = config.card_config();
    tracing::info!(
        entity = %card_config.entity,
        last_backup_entity = %card_config.last_backup_entity(),
        size_entity = %card_config.size_entity(),
        "card configured"
    );
    let card_service = CardService::new(
        card_config,
        AskamaRenderer::default(),
        config.dashboard.stream_capacity,
    )?;

    // HTTP
    let state = AppState::new(card_service, registry, config.dashboard.refresh_seconds);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "guardiand listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("guardiand stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
