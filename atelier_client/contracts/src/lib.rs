use std::future::Future;

use atelier_models::form::FormFields;
use thiserror::Error;

/// Boundary to the remote contact endpoint. One attempt per call, no retry.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionClient: Send + Sync + 'static {
    fn submit(
        &self,
        fields: FormFields,
    ) -> impl Future<Output = Result<SubmissionAck, SubmitError>> + Send;
}

/// Successful acknowledgment from the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint rejected the submission (its own validation failed).
    #[error("{0}")]
    Rejected(String),
    /// The endpoint could not be reached or failed unexpectedly.
    #[error("Something went wrong sending your message. Please try again later.")]
    Unavailable,
}

#[cfg(feature = "mock")]
impl MockSubmissionClient {
    pub fn with_submit(
        mut self,
        fields: FormFields,
        result: Result<SubmissionAck, SubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
