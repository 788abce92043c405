//! Farmcare Recommendation Service
//!
//! A single-endpoint HTTP service for crop-disease treatment planning:
//! request validation, Gemini prompt construction, JSON extraction from the
//! model's free-form reply, weekly schedule derivation, and an emailed HTML
//! report via Resend.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration: all origins, GET/POST/OPTIONS, Content-Type and
    // Authorization headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    routes::app_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
