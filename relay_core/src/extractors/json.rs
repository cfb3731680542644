//! JSON extractor that reports body problems through `AppError`

use crate::{error::AppError, validation::ValidationResult};
use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but rejections render as the application's error body.
///
/// Well-formed JSON that does not fit the target type (a missing `name`, a
/// number where text is expected) is a validation failure and answers 422.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let mut result = ValidationResult::success();
            result.add_error("body", &err.body_text());
            AppError::Validation(result)
        }
        JsonRejection::JsonSyntaxError(err) => AppError::BadRequest(err.body_text()),
        JsonRejection::MissingJsonContentType(err) => {
            AppError::UnsupportedMediaType(err.body_text())
        }
        other => AppError::BadRequest(other.body_text()),
    }
}
