use std::future::Future;

use atelier_models::email_address::Mailbox;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Sends `email` and reports whether the relay accepted it.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A plain-text email. Inquiry forwarding never needs markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: Mailbox,
    pub subject: String,
    pub body: String,
    pub reply_to: Option<Mailbox>,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_ping(mut self, result: anyhow::Result<()>) -> Self {
        self.expect_ping()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
