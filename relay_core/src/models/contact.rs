//! Contact form models

use crate::validation::rules::validate_not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const SUBMISSION_SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// A contact form as posted by the single-page app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactFormRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(
        length(max = 254, message = "Email is too long"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    pub company: Option<String>,

    pub phone: Option<String>,

    #[validate(custom(function = "validate_not_blank", message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    pub fn submitted() -> Self {
        Self {
            success: true,
            message: SUBMISSION_SUCCESS_MESSAGE.to_string(),
        }
    }
}
