use std::sync::Arc;

use atelier_core_health_contracts::{HealthService, HealthStatus};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse { http: true, email };

    (status, Json(response)).into_response()
}
