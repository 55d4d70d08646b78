use std::sync::Arc;

use atelier_client_contracts::{SubmissionAck, SubmissionClient, SubmitError};
use atelier_models::form::FormFields;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::http::HttpClient;

mod http;

/// Posts validated form fields to the contact endpoint and maps its
/// 200/400/5xx responses onto [`SubmitError`].
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    endpoint: Arc<Url>,
    client: HttpClient,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: HttpClient::default(),
        }
    }
}

impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, fields: FormFields) -> Result<SubmissionAck, SubmitError> {
        let request = ContactRequest {
            name: &fields.name,
            email: &fields.email,
            message: &fields.message,
            budget: (!fields.budget.is_empty()).then_some(fields.budget.as_str()),
        };

        let response = self
            .client
            .post((*self.endpoint).clone())
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                warn!("Failed to reach the contact endpoint: {err}");
                SubmitError::Unavailable
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            warn!("Failed to read the contact endpoint response: {err}");
            SubmitError::Unavailable
        })?;

        interpret_response(status, &body)
    }
}

fn interpret_response(status: StatusCode, body: &[u8]) -> Result<SubmissionAck, SubmitError> {
    if status == StatusCode::BAD_REQUEST {
        return match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(rejection) => Err(SubmitError::Rejected(rejection.error)),
            Err(err) => {
                warn!("Malformed rejection from the contact endpoint: {err}");
                Err(SubmitError::Unavailable)
            }
        };
    }

    if !status.is_success() {
        warn!(%status, "Contact endpoint reported a failure");
        return Err(SubmitError::Unavailable);
    }

    match serde_json::from_slice::<AckResponse>(body) {
        Ok(AckResponse {
            success: true,
            message,
        }) => Ok(SubmissionAck { message }),
        Ok(AckResponse { success: false, .. }) => {
            warn!("Contact endpoint acknowledged without success");
            Err(SubmitError::Unavailable)
        }
        Err(err) => {
            warn!("Malformed acknowledgment from the contact endpoint: {err}");
            Err(SubmitError::Unavailable)
        }
    }
}

#[derive(Serialize)]
struct ContactRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<&'a str>,
}

#[derive(Deserialize)]
struct AckResponse {
    success: bool,
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}
