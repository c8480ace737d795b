//! Shared API state, error mapping and the service-level handlers

use crate::directory::{DashboardStats, Directory, PlatformStats};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

/// Shared server state
pub struct ServerState {
    pub directory: Directory,
}

/// Shared directory state
pub type DirectoryState = Arc<ServerState>;

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Root and health
// ============================================================================

/// Welcome message with the endpoint map
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the venture directory API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "investors": "/api/investors",
            "startups": "/api/startups",
            "stats": "/api/stats",
            "health": "/health"
        }
    }))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
}

/// Health check handler: 200 when the document store answers, 503 otherwise
pub async fn health(State(state): State<DirectoryState>) -> (StatusCode, Json<HealthResponse>) {
    let store_ok = state
        .directory
        .store()
        .health_check()
        .await
        .unwrap_or(false);

    let (http_status, status, store) = if store_ok {
        (StatusCode::OK, "healthy", "connected")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "disconnected")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
        }),
    )
}

// ============================================================================
// Statistics
// ============================================================================

/// Platform headline numbers
pub async fn get_platform_stats(
    State(state): State<DirectoryState>,
) -> Result<Json<PlatformStats>, AppError> {
    let stats = state.directory.stats().platform().await?;
    Ok(Json(stats))
}

/// Dashboard breakdown
pub async fn get_dashboard_stats(
    State(state): State<DirectoryState>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = state.directory.stats().dashboard().await?;
    Ok(Json(stats))
}

// ============================================================================
// Error handling
// ============================================================================

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Internal(anyhow::Error),
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
