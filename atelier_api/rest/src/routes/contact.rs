use std::sync::Arc;

use atelier_core_contact_contracts::{ContactService, ContactSubmitError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};

use super::{error, internal_server_error};
use crate::models::{ApiContactAck, ApiContactRequest};

const ACK_MESSAGE: &str = "Thanks for reaching out! We'll get back to you within two business days.";

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(submit_inquiry).options(preflight),
        )
        .with_state(service)
}

async fn submit_inquiry(
    service: State<Arc<impl ContactService>>,
    request: Result<Json<ApiContactRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = request else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body.");
    };

    let inquiry = match request.into_inquiry() {
        Ok(inquiry) => inquiry,
        Err(message) => return error(StatusCode::BAD_REQUEST, message),
    };

    match service.submit_inquiry(inquiry).await {
        Ok(()) => Json(ApiContactAck {
            success: true,
            message: ACK_MESSAGE.into(),
        })
        .into_response(),
        Err(ContactSubmitError::Deliver) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "We couldn't take your message right now. Please try again later.",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}
