use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiErrorResponse;

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred. Please try again later.",
    )
}

fn error(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(ApiErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
