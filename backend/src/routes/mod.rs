//! Route definitions for the Farmcare recommendation service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create application routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/", get(handlers::health_check))
        // Recommendation endpoint, with explicit pre-flight handling
        .route(
            "/recommend",
            post(handlers::recommend).options(handlers::recommend_preflight),
        )
}
