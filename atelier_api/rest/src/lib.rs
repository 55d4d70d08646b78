use std::net::IpAddr;

use atelier_core_contact_contracts::ContactService;
use atelier_core_health_contracts::HealthService;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact) -> Self {
        Self { health, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .layer(CorsLayer::permissive());

        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}
