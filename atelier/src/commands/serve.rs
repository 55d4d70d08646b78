use std::sync::Arc;

use atelier_api_rest::RestServer;
use atelier_config::Config;
use atelier_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use atelier_core_health_impl::HealthServiceImpl;
use atelier_email_contracts::EmailService;
use atelier_email_impl::EmailServiceImpl;
use tracing::{info, warn};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = EmailServiceImpl::new(&config.email.smtp_url, config.email.from.clone())?;
    if let Err(err) = email.ping().await {
        // Log-only operation still works without a reachable relay.
        warn!("Failed to ping smtp relay: {err}");
    }

    if config.contact.recipient.is_none() {
        info!("No inquiry recipient configured, inquiries will only be logged");
    }
    let contact = ContactServiceImpl::new(
        email.clone(),
        ContactServiceConfig {
            recipient: config.contact.recipient.map(Arc::new),
        },
    );
    let health = HealthServiceImpl::new(email);

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    RestServer::new(health, contact)
        .serve(config.http.host, config.http.port)
        .await
}
