//! Health check handlers

use crate::{models::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /api/health");

    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "remote_table": state.submission_handler.table_name(),
        "timestamp": chrono::Utc::now().timestamp()
    })))
}
