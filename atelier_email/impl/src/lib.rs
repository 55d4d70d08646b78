use anyhow::anyhow;
use atelier_email_contracts::{Email, EmailService};
use atelier_models::email_address::Mailbox;
use atelier_utils::Apply;
use lettre::{
    message::{header, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// Builds the (lazy) SMTP transport; no connection is made until the
    /// first send or ping.
    pub fn new(url: &str, from: Mailbox) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to, |builder, reply_to| {
                MessageBuilder::reply_to(builder, reply_to.0)
            })
            .subject(email.subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp relay"))
    }
}
