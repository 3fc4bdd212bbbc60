//! HTTP layer - axum routes over the core storage and aggregation functions.
//!
//! Handlers stay thin: they pull records through the `core` storage modules, run
//! the pure aggregation functions where needed, and serialize the result. Every
//! error is rendered as `{"detail": "..."}` with a matching status code.

/// `/api/analytics/*` endpoints
pub mod analytics;
/// `/api/dashboard`
pub mod dashboard;
/// `/api/expenses` endpoints
pub mod expenses;
/// `/api/health`
pub mod health;
/// `/api/income` endpoints
pub mod income;
/// `/api/journal` endpoints
pub mod journal;
/// `/api/milestones` endpoints
pub mod milestones;

use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

/// Most entries returned by a single income, expense or journal listing.
pub const LIST_LIMIT: u64 = 100;
/// Most milestones returned by the milestone listing.
pub const MILESTONE_LIMIT: u64 = 10;
/// Most groups returned by the income-by-source breakdown.
pub const SOURCE_GROUP_LIMIT: usize = 10;
/// Most monthly buckets returned per series.
pub const MONTHLY_BUCKET_LIMIT: usize = 20;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for all storage operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already-initialized connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// JSON body extractor whose rejections are reported as `{"detail": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
            status: rejection.status().as_u16(),
        }
    }
}

/// Acknowledgement body returned by create, update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: &'static str,
    /// Identifier of the created record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MessageResponse {
    /// Acknowledgement without an identifier.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    /// Acknowledgement carrying the identifier of a newly created record.
    #[must_use]
    pub const fn created(message: &'static str, id: String) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidAmount { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::UNPROCESSABLE_ENTITY)
            }
            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Builds the full application router with CORS and request tracing.
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .merge(income::router())
        .merge(expenses::router())
        .merge(milestones::router())
        .merge(journal::router())
        .merge(analytics::router());

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the API until Ctrl-C is received.
///
/// # Errors
/// Returns `Error::Io` if the socket cannot be bound or the server fails.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Financial Roadmap API listening on {}", addr);
    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
