pub mod submission;

pub use submission::SubmissionResponse;
