pub mod contact;
pub mod request;

pub use contact::{ContactFormRequest, SubmissionResponse, SUBMISSION_SUCCESS_MESSAGE};
pub use request::ApiResponse;
