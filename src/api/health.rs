//! Health check endpoint.

use super::AppState;
use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    message: &'static str,
}

/// Liveness probe; does not touch the database.
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        message: "Financial Roadmap API is running",
    })
}

/// Routes for `/health`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
