use atelier_models::form::{
    email_has_valid_shape, FieldError, FieldErrors, FormField, FormFields, MIN_MESSAGE_CHARS,
};

/// Computes the full error map for `fields`. Pure and deterministic; every
/// field is checked in the same pass, nothing is merged incrementally.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(FormField::Name, FieldError::NameMissing);
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, FieldError::EmailMissing);
    } else if !email_has_valid_shape(email) {
        errors.insert(FormField::Email, FieldError::EmailInvalid);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, FieldError::MessageMissing);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(FormField::Message, FieldError::MessageTooShort);
    }

    errors
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: String::new(),
            budget: String::new(),
            message: "I would like to discuss a full rebrand for my company this quarter.".into(),
        }
    }

    #[test]
    fn valid_fields_pass() {
        let errors = validate(&valid_fields());
        assert!(errors.is_empty());
    }

    #[test]
    fn name_must_not_trim_to_empty() {
        for name in ["", "   ", "\t\n"] {
            let fields = FormFields {
                name: name.into(),
                ..valid_fields()
            };
            assert_eq!(
                validate(&fields).get(FormField::Name),
                Some(FieldError::NameMissing),
                "name: {name:?}"
            );
        }

        let fields = FormFields {
            name: "  J  ".into(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields).get(FormField::Name), None);
    }

    #[test]
    fn email_empty_takes_precedence_over_shape() {
        let fields = FormFields {
            email: "  ".into(),
            ..valid_fields()
        };
        assert_eq!(
            validate(&fields).get(FormField::Email),
            Some(FieldError::EmailMissing)
        );
    }

    #[test]
    fn email_shape_is_checked_on_the_trimmed_value() {
        for (email, expected) in [
            ("a@b.c", None),
            ("  jane@example.com  ", None),
            ("abc", Some(FieldError::EmailInvalid)),
            ("a@b", Some(FieldError::EmailInvalid)),
            ("jane@example", Some(FieldError::EmailInvalid)),
        ] {
            let fields = FormFields {
                email: email.into(),
                ..valid_fields()
            };
            assert_eq!(
                validate(&fields).get(FormField::Email),
                expected,
                "email: {email:?}"
            );
        }
    }

    #[test]
    fn message_empty_takes_precedence_over_length() {
        let fields = FormFields {
            message: " \n ".into(),
            ..valid_fields()
        };
        assert_eq!(
            validate(&fields).get(FormField::Message),
            Some(FieldError::MessageMissing)
        );
    }

    #[test]
    fn message_length_boundary() {
        let nineteen = "x".repeat(19);
        let twenty = "x".repeat(20);
        let padded = format!("   {twenty}   ");

        for (message, expected) in [
            (nineteen.as_str(), Some(FieldError::MessageTooShort)),
            (twenty.as_str(), None),
            (padded.as_str(), None),
        ] {
            let fields = FormFields {
                message: message.into(),
                ..valid_fields()
            };
            assert_eq!(
                validate(&fields).get(FormField::Message),
                expected,
                "message: {message:?}"
            );
        }
    }

    #[test]
    fn company_and_budget_never_produce_errors() {
        let fields = FormFields {
            company: "  ".into(),
            budget: "definitely-not-a-budget-token".into(),
            ..valid_fields()
        };
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn validate_is_idempotent() {
        let fields = FormFields {
            name: String::new(),
            email: "not-an-email".into(),
            message: "too short".into(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), validate(&fields));
    }

    #[test]
    fn all_errors_are_computed_in_one_pass() {
        let fields = FormFields {
            name: String::new(),
            email: "not-an-email".into(),
            company: String::new(),
            budget: String::new(),
            message: "too short".into(),
        };

        let errors = validate(&fields);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FormField::Name), Some(FieldError::NameMissing));
        assert_eq!(errors.get(FormField::Email), Some(FieldError::EmailInvalid));
        assert_eq!(
            errors.get(FormField::Message),
            Some(FieldError::MessageTooShort)
        );
        assert_eq!(
            errors
                .iter()
                .map(|(_, error)| error.message())
                .collect::<Vec<_>>(),
            vec![
                "Please enter your name",
                "Please enter a valid email address",
                "Please provide a bit more detail about your project",
            ]
        );
    }
}
