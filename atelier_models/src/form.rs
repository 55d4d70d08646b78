use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

/// Minimal `local@domain.tld` shape check, deliberately far more permissive
/// than a full address parser.
pub static EMAIL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn email_has_valid_shape(value: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(value)
}

/// Minimum number of characters (after trimming) a message must contain.
pub const MIN_MESSAGE_CHARS: usize = 20;

/// The user-editable contact form payload. All fields start out empty;
/// `budget` holds one of the [`BudgetRange`] tokens or stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub budget: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Budget => &self.budget,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::Budget => self.budget = value,
            FormField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Budget,
    Message,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::Budget,
        Self::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameMissing,
    EmailMissing,
    EmailInvalid,
    MessageMissing,
    MessageTooShort,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            Self::NameMissing => "Please enter your name",
            Self::EmailMissing => "Please enter your email",
            Self::EmailInvalid => "Please enter a valid email address",
            Self::MessageMissing => "Please enter a message",
            Self::MessageTooShort => "Please provide a bit more detail about your project",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Field-keyed validation errors. Absence of a key means the field is
/// currently considered valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Removes the error attached to `field`, if any.
    pub fn clear(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

/// Lifecycle stage of the contact form.
///
/// `Failed` preserves the entered field values and is editable exactly like
/// `Editing`; the first edit returns the form to `Editing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded {
        ack: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionPhase {
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Editing | Self::Failed { .. })
    }
}

/// Budget tokens offered by the form. Informational only: the endpoint never
/// enforces them and the client never flags an unknown token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BudgetRange {
    From15kTo25k,
    From25kTo50k,
    From50kTo100k,
    Above100k,
    Retainer,
}

impl BudgetRange {
    pub const ALL: [Self; 5] = [
        Self::From15kTo25k,
        Self::From25kTo50k,
        Self::From50kTo100k,
        Self::Above100k,
        Self::Retainer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::From15kTo25k => "15k-25k",
            Self::From25kTo50k => "25k-50k",
            Self::From50kTo100k => "50k-100k",
            Self::Above100k => "100k+",
            Self::Retainer => "retainer",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown budget range (expected one of 15k-25k, 25k-50k, 50k-100k, 100k+, retainer)")]
pub struct ParseBudgetRangeError;

impl FromStr for BudgetRange {
    type Err = ParseBudgetRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or(ParseBudgetRangeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        for (input, expected) in [
            ("a@b.c", true),
            ("jane@example.com", true),
            ("jane.doe@studio.co.uk", true),
            ("abc", false),
            ("a@b", false),
            ("a@b.", false),
            ("@b.c", false),
            ("a b@c.d", false),
            ("a@b c.d", false),
            ("", false),
        ] {
            assert_eq!(email_has_valid_shape(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn budget_range_tokens_roundtrip() {
        for range in BudgetRange::ALL {
            assert_eq!(range.as_str().parse::<BudgetRange>().unwrap(), range);
        }
        assert!("10k".parse::<BudgetRange>().is_err());
        assert!("".parse::<BudgetRange>().is_err());
    }

    #[test]
    fn field_errors_clear() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Name, FieldError::NameMissing);
        errors.insert(FormField::Email, FieldError::EmailInvalid);

        assert!(errors.clear(FormField::Name));
        assert!(!errors.clear(FormField::Name));
        assert_eq!(errors.get(FormField::Name), None);
        assert_eq!(errors.get(FormField::Email), Some(FieldError::EmailInvalid));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn fields_get_set() {
        let mut fields = FormFields::default();
        for field in FormField::ALL {
            assert_eq!(fields.get(field), "");
            fields.set(field, field.as_str().to_owned());
        }
        assert_eq!(fields.company, "company");
        assert_eq!(fields.message, "message");
    }
}
