//! HTTP routes for the query server

pub mod query;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;

/// Build all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/query", post(query::handle_query))
}

/// Liveness message
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Health Compass API"
    }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
