use crate::{
    config::RemoteConfig,
    error::{AppError, Result},
    models::{ContactFormRequest, SubmissionResponse},
    remote::{HttpRowStoreClient, RemoteRowPayload, RowStoreClient, RowStoreError},
    validation::Validatable,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// Validates a contact form and forwards it as one row to the remote table.
///
/// Each call performs at most one outbound request and never retries.
/// Submissions are not deduplicated.
#[derive(Clone)]
pub struct FormSubmissionHandler {
    client: Arc<dyn RowStoreClient>,
    table_name: String,
}

impl FormSubmissionHandler {
    pub fn new(client: Arc<dyn RowStoreClient>, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let client = HttpRowStoreClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.table_name.clone()))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    #[instrument(name = "contact_submission", skip_all, fields(submission_id = %Uuid::new_v4()))]
    pub async fn submit(&self, request: ContactFormRequest) -> Result<SubmissionResponse> {
        let validation = request.validate_comprehensive();
        if !validation.is_valid {
            debug!(invalid_fields = ?validation.errors.keys().collect::<Vec<_>>(), "Contact form rejected");
            return Err(AppError::Validation(validation));
        }

        let payload = RemoteRowPayload::from_request(&self.table_name, &request)?;

        match self.client.insert_row(&payload).await {
            Ok(()) => Ok(SubmissionResponse::submitted()),
            Err(RowStoreError::Rejected { status, body }) => {
                error!(
                    status = status.as_u16(),
                    detail = %body,
                    "Remote service rejected contact form"
                );
                Err(AppError::RemoteRejection {
                    status,
                    detail: body,
                })
            }
            Err(RowStoreError::Transport(err)) => {
                error!(error = %err, "Failed to connect to remote service");
                Err(AppError::TransportFailure(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SUBMISSION_SUCCESS_MESSAGE;
    use crate::test_support::CapturedLevels;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Mutex;
    use tracing::Level;

    enum Outcome {
        Accept,
        Reject(StatusCode, serde_json::Value),
        Unreachable,
    }

    struct RecordingClient {
        outcome: Outcome,
        calls: Mutex<Vec<RemoteRowPayload>>,
    }

    impl RecordingClient {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<RemoteRowPayload> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RowStoreClient for RecordingClient {
        async fn insert_row(&self, payload: &RemoteRowPayload) -> std::result::Result<(), RowStoreError> {
            self.calls.lock().unwrap().push(payload.clone());
            match &self.outcome {
                Outcome::Accept => Ok(()),
                Outcome::Reject(status, body) => Err(RowStoreError::Rejected {
                    status: *status,
                    body: body.clone(),
                }),
                Outcome::Unreachable => Err(RowStoreError::Transport(
                    "error sending request: connection refused".to_string(),
                )),
            }
        }
    }

    fn ada() -> ContactFormRequest {
        ContactFormRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            phone: None,
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_forwards_renamed_row() {
        let client = RecordingClient::new(Outcome::Accept);
        let handler = FormSubmissionHandler::new(client.clone(), "Table1");

        let response = handler.submit(ada()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, SUBMISSION_SUCCESS_MESSAGE);

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_value(&calls[0]).unwrap(),
            json!({
                "table_name": "Table1",
                "row": {
                    "Name": "Ada",
                    "Email": "ada@example.com",
                    "Unternehmen": null,
                    "Telefon": null,
                    "Nachricht": "Hello"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_call() {
        let client = RecordingClient::new(Outcome::Accept);
        let handler = FormSubmissionHandler::new(client.clone(), "Table1");

        let request = ContactFormRequest {
            email: "not-an-email".to_string(),
            ..ada()
        };

        match handler.submit(request).await {
            Err(AppError::Validation(result)) => assert!(result.errors.contains_key("email")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_message_makes_no_call() {
        let client = RecordingClient::new(Outcome::Accept);
        let handler = FormSubmissionHandler::new(client.clone(), "Table1");

        let request = ContactFormRequest {
            message: " ".to_string(),
            ..ada()
        };

        let err = handler.submit(request).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remote_rejection_is_passed_through() {
        let client = RecordingClient::new(Outcome::Reject(
            StatusCode::BAD_REQUEST,
            json!({"error": "bad field"}),
        ));
        let handler = FormSubmissionHandler::new(client.clone(), "Table1");

        match handler.submit(ada()).await {
            Err(AppError::RemoteRejection { status, detail }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(detail, json!({"error": "bad field"}));
            }
            other => panic!("expected remote rejection, got {:?}", other),
        }
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_500() {
        let client = RecordingClient::new(Outcome::Unreachable);
        let handler = FormSubmissionHandler::new(client.clone(), "Table1");

        let err = handler.submit(ada()).await.unwrap_err();

        assert!(matches!(err, AppError::TransportFailure(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_submissions_are_not_deduplicated() {
        let client = RecordingClient::new(Outcome::Accept);
        let handler = FormSubmissionHandler::new(client.clone(), "Table1");

        handler.submit(ada()).await.unwrap();
        handler.submit(ada()).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_remote_rejection_logs_one_error() {
        let (logs, _guard) = CapturedLevels::install();
        let client = RecordingClient::new(Outcome::Reject(
            StatusCode::BAD_REQUEST,
            json!({"error": "bad field"}),
        ));
        let handler = FormSubmissionHandler::new(client, "Table1");

        assert!(handler.submit(ada()).await.is_err());

        assert_eq!(logs.count(Level::ERROR), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_logs_one_error() {
        let (logs, _guard) = CapturedLevels::install();
        let handler = FormSubmissionHandler::new(RecordingClient::new(Outcome::Unreachable), "Table1");

        assert!(handler.submit(ada()).await.is_err());

        assert_eq!(logs.count(Level::ERROR), 1);
    }

    #[tokio::test]
    async fn test_validation_failure_logs_no_error() {
        let (logs, _guard) = CapturedLevels::install();
        let handler = FormSubmissionHandler::new(RecordingClient::new(Outcome::Accept), "Table1");

        let request = ContactFormRequest {
            email: "not-an-email".to_string(),
            ..ada()
        };
        assert!(handler.submit(request).await.is_err());

        assert_eq!(logs.count(Level::ERROR), 0);
        assert_eq!(logs.count(Level::WARN), 0);
    }
}
