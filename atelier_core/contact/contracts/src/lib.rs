use std::future::Future;

use atelier_models::inquiry::Inquiry;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Records an already-validated inquiry and, when a recipient is
    /// configured, forwards it to the studio mailbox.
    fn submit_inquiry(
        &self,
        inquiry: Inquiry,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to deliver inquiry.")]
    Deliver,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit_inquiry(
        mut self,
        inquiry: Inquiry,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
