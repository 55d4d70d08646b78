use atelier_core_health_contracts::{HealthService, HealthStatus};
use atelier_email_contracts::EmailService;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email) -> Self {
        Self { email }
    }
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp relay: {err}"))
            .is_ok();

        HealthStatus { email }
    }
}
