mod config;
mod errors;
mod interpreter;
mod llm_client;
mod models;
mod presentation;
mod routes;
mod state;
mod workflows;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{AnthropicGateway, GatewaySettings, ModelGateway};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HR360 API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize model gateway
    let gateway = AnthropicGateway::new(GatewaySettings {
        api_key: config.anthropic_api_key.clone(),
        api_url: config.anthropic_api_url.clone(),
        model: config.anthropic_model.clone(),
        max_tokens: config.max_tokens,
        timeout: Duration::from_secs(config.model_timeout_secs),
    })?;
    info!(
        "Model gateway initialized (model: {}, max_tokens: {})",
        gateway.model(),
        config.max_tokens
    );

    let state = AppState {
        gateway: Arc::new(gateway),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
