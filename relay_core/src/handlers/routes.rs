//! Route table: JSON API under `/api`, built frontend everywhere else

use crate::{config::FrontendConfig, AppState};
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::services::{ServeDir, ServeFile};

use super::{contact::handle_contact_submit, health::handle_health};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(handle_api_root))
        .route("/api/", get(handle_api_root))
        .route("/api/health", get(handle_health))
        .route("/api/contact", post(handle_contact_submit))
}

/// Unmatched paths fall through to `index.html` so client-side routes resolve.
pub fn create_routes(frontend: &FrontendConfig) -> Router<AppState> {
    api_routes()
        .nest_service("/static", ServeDir::new(frontend.static_dir()))
        .fallback_service(ServeFile::new(frontend.index_file()))
}

async fn handle_api_root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Hello World" }))
}
