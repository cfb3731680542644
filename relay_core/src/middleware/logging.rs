//! Request logging middleware configuration

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{info_span, Span};

/// Wraps every route in an `http_request` span and logs completion at a level
/// matching the status class.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    version = ?request.version(),
                )
            })
            .on_request(|request: &Request<Body>, _span: &Span| {
                tracing::debug!(
                    "started processing request {} {}",
                    request.method(),
                    request.uri().path()
                );
            })
            .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                let status = response.status();
                let latency_ms = latency.as_millis();

                if status.is_success() || status.is_redirection() {
                    tracing::info!(
                        status = status.as_u16(),
                        latency_ms = latency_ms,
                        "request completed successfully"
                    );
                } else if status.is_client_error() {
                    tracing::warn!(
                        status = status.as_u16(),
                        latency_ms = latency_ms,
                        "client error response"
                    );
                } else {
                    // The handler that produced a 5xx has already logged the cause.
                    tracing::warn!(
                        status = status.as_u16(),
                        latency_ms = latency_ms,
                        "server error response"
                    );
                }
            })
            .on_failure(
                |class: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                    // 5xx statuses are reported by `on_response`.
                    if let ServerErrorsFailureClass::Error(error) = class {
                        tracing::error!(
                            latency_ms = latency.as_millis(),
                            error = %error,
                            "request failed"
                        );
                    }
                },
            ),
    )
}
