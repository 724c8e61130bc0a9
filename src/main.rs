//! Switchboard gateway entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use switchboard::adapters::documents::RestDocumentStore;
use switchboard::adapters::http::{gateway_app, GatewayAppState};
use switchboard::adapters::providers::{
    RestChatClient, RestClassroomClient, RestEmailClient, RestResearchClient, RestVoiceClient,
};
use switchboard::application::{ActionRouter, CapabilityProber};
use switchboard::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "Starting switchboard gateway"
    );
    for provider in config.configured_providers() {
        tracing::info!(provider = %provider, "Provider credentials present");
    }

    let router = Arc::new(ActionRouter::new(
        Arc::new(RestClassroomClient::new(config.classroom.clone())),
        Arc::new(RestVoiceClient::new(config.voice.clone())),
        Arc::new(RestEmailClient::new(config.email.clone())),
        Arc::new(RestResearchClient::new(config.research.clone())),
        Arc::new(RestChatClient::new(config.chat.clone())),
        Arc::new(RestDocumentStore::new(config.documents.clone())),
    ));
    let prober = Arc::new(CapabilityProber::new(router.clone()));

    let app = gateway_app(
        GatewayAppState { router, prober },
        std::time::Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install shutdown handler");
    }
}
