pub mod submission;

pub use submission::FormSubmissionHandler;
