//! Contact form endpoint

use crate::{
    error::Result,
    extractors::AppJson,
    models::ContactFormRequest,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};

pub async fn handle_contact_submit(
    State(state): State<AppState>,
    AppJson(form): AppJson<ContactFormRequest>,
) -> Result<impl IntoResponse> {
    let response = state.submission_handler.submit(form).await?;
    Ok(Json(response))
}
