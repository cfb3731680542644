//! HTTP client for the remote row-storage API

use super::row::RemoteRowPayload;
use crate::config::RemoteConfig;
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowStoreError {
    #[error("remote responded with {status}: {body}")]
    Rejected { status: StatusCode, body: Value },

    #[error("request did not complete: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RowStoreError {
    fn from(err: reqwest::Error) -> Self {
        RowStoreError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait RowStoreClient: Send + Sync {
    async fn insert_row(&self, payload: &RemoteRowPayload) -> Result<(), RowStoreError>;
}

#[derive(Clone)]
pub struct HttpRowStoreClient {
    http_client: reqwest::Client,
    insert_url: String,
    authorization: String,
}

impl HttpRowStoreClient {
    pub fn new(config: &RemoteConfig) -> crate::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("contact-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            insert_url: config.insert_url(),
            authorization: format!("Token {}", config.api_token),
        })
    }
}

#[async_trait]
impl RowStoreClient for HttpRowStoreClient {
    async fn insert_row(&self, payload: &RemoteRowPayload) -> Result<(), RowStoreError> {
        let response = self
            .http_client
            .post(&self.insert_url)
            .header(header::AUTHORIZATION, &self.authorization)
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // The status line arrived, so an unreadable body is still a rejection.
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
            Err(_) => Value::Null,
        };

        Err(RowStoreError::Rejected { status, body })
    }
}
