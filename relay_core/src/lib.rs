//! Core library for the contact relay: forwards contact-form submissions to a
//! remote row-storage API and serves the prebuilt single-page app.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod remote;
pub mod services;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use middleware::cors::{cors_layer_from_config, cors_layer_permissive};
pub use models::{ContactFormRequest, SubmissionResponse};
pub use remote::{HttpRowStoreClient, RemoteRowPayload, RowStoreClient, RowStoreError};
pub use services::FormSubmissionHandler;

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub submission_handler: FormSubmissionHandler,
}

impl AppState {
    pub fn new(submission_handler: FormSubmissionHandler) -> Self {
        Self {
            app_name: "Contact Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            submission_handler,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let submission_handler = FormSubmissionHandler::from_config(&config.remote)?;
        Ok(Self::new(submission_handler))
    }
}

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let router = create_routes(&config.frontend)
        .layer(cors_layer_from_config(&config.cors))
        .with_state(state);

    middleware::logging::with_request_tracing(router)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
