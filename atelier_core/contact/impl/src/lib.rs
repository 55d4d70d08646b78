use std::sync::Arc;

use atelier_core_contact_contracts::{ContactService, ContactSubmitError};
use atelier_email_contracts::{Email, EmailService};
use atelier_models::{email_address::Mailbox, inquiry::Inquiry};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Studio mailbox inquiries are forwarded to. `None` means log-only.
    pub recipient: Option<Arc<Mailbox>>,
}

impl<EmailS> ContactServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit_inquiry(&self, inquiry: Inquiry) -> Result<(), ContactSubmitError> {
        info!(
            name = %*inquiry.name,
            email = %*inquiry.email,
            budget = ?inquiry.budget,
            "Received contact inquiry"
        );
        debug!("Inquiry message:\n{}", *inquiry.message);

        let Some(recipient) = &self.config.recipient else {
            return Ok(());
        };

        let reply_to = match inquiry.email.parse::<Mailbox>() {
            Ok(mailbox) => Some(mailbox),
            Err(err) => {
                warn!(
                    "Inquiry email {} is not usable as a reply-to address: {err}",
                    *inquiry.email
                );
                None
            }
        };

        let mut body = format!(
            "Message from {} ({}):\n\n",
            *inquiry.name, *inquiry.email
        );
        if let Some(budget) = &inquiry.budget {
            body.push_str(&format!("Budget: {budget}\n\n"));
        }
        body.push_str(&inquiry.message);

        let email = Email {
            recipient: (**recipient).clone(),
            subject: format!("[Contact Form] New project inquiry from {}", *inquiry.name),
            body,
            reply_to,
        };

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Deliver);
        }

        Ok(())
    }
}
