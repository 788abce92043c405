//! Farmcare Recommendation Service - Backend Server
//!
//! Accepts crop-disease reports, asks Gemini for a pesticide treatment
//! recommendation, derives a dated schedule, and emails the report to the
//! requester.

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farmcare_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmcare_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Farmcare Recommendation Server");
    tracing::info!("Environment: {}", config.environment);

    if config.gemini.api_key.is_none() {
        tracing::warn!("Gemini API key not configured; /recommend will fail until it is set");
    }
    if config.resend.api_key.is_none() {
        tracing::warn!("Resend API key not configured; reports will not be emailed");
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
