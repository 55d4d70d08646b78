use atelier_models::inquiry::{
    Inquiry, InquiryAuthorName, InquiryAuthorNameError, InquiryEmail, InquiryMessage,
    InquiryMessageError,
};
use serde::{Deserialize, Serialize};

/// Inbound contact submission. Fields default to empty so that a missing
/// field reports the same validation error as an empty one; unknown fields
/// (e.g. `company`) are tolerated and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub budget: Option<String>,
}

impl ApiContactRequest {
    /// Server-side validation, independent of whatever the submitting client
    /// already checked.
    pub fn into_inquiry(self) -> Result<Inquiry, &'static str> {
        let name = InquiryAuthorName::try_new(self.name).map_err(|err| match err {
            InquiryAuthorNameError::NotEmptyViolated => "Please enter your name.",
            InquiryAuthorNameError::LenCharMaxViolated => "Name is too long.",
        })?;

        if self.email.trim().is_empty() {
            return Err("Please enter your email.");
        }
        let email =
            InquiryEmail::try_new(self.email).map_err(|_| "Please enter a valid email address.")?;

        let message = InquiryMessage::try_new(self.message).map_err(|err| match err {
            InquiryMessageError::NotEmptyViolated => "Please enter a message.",
            InquiryMessageError::LenCharMaxViolated => "Message is too long.",
        })?;

        let budget = self.budget.filter(|budget| !budget.trim().is_empty());

        Ok(Inquiry {
            name,
            email,
            message,
            budget,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ApiContactRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "I would like to discuss a full rebrand for my company this quarter.",
        }))
        .unwrap()
    }

    #[test]
    fn valid_request() {
        let inquiry = request().into_inquiry().unwrap();
        assert_eq!(*inquiry.name, "Jane Doe");
        assert_eq!(*inquiry.email, "jane@example.com");
        assert_eq!(inquiry.budget, None);
    }

    #[test]
    fn missing_fields_deserialize_to_empty() {
        let request: ApiContactRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.into_inquiry(), Err("Please enter your name."));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let request: ApiContactRequest = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "I would like to discuss a full rebrand for my company this quarter.",
            "company": "Acme",
        }))
        .unwrap();
        assert!(request.into_inquiry().is_ok());
    }

    #[test]
    fn email_errors_distinguish_missing_from_malformed() {
        let missing = ApiContactRequest {
            email: "   ".into(),
            ..request()
        };
        assert_eq!(missing.into_inquiry(), Err("Please enter your email."));

        let malformed = ApiContactRequest {
            email: "not-an-email".into(),
            ..request()
        };
        assert_eq!(
            malformed.into_inquiry(),
            Err("Please enter a valid email address.")
        );
    }

    #[test]
    fn message_errors() {
        let missing = ApiContactRequest {
            message: String::new(),
            ..request()
        };
        assert_eq!(missing.into_inquiry(), Err("Please enter a message."));

        let oversized = ApiContactRequest {
            message: "x".repeat(5000),
            ..request()
        };
        assert_eq!(oversized.into_inquiry(), Err("Message is too long."));
    }

    #[test]
    fn blank_budget_is_dropped() {
        let blank = ApiContactRequest {
            budget: Some("  ".into()),
            ..request()
        };
        assert_eq!(blank.into_inquiry().unwrap().budget, None);

        let set = ApiContactRequest {
            budget: Some("100k+".into()),
            ..request()
        };
        assert_eq!(set.into_inquiry().unwrap().budget, Some("100k+".into()));
    }

    #[test]
    fn ack_wire_shape() {
        let ack = ApiContactAck {
            success: true,
            message: "Thanks for reaching out!".into(),
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            serde_json::json!({"success": true, "message": "Thanks for reaching out!"})
        );
    }

    #[test]
    fn error_wire_shape() {
        let error = ApiErrorResponse {
            error: "Please enter your name.".into(),
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({"error": "Please enter your name."})
        );
    }
}
