use nutype::nutype;

use crate::form::EMAIL_SHAPE_REGEX;

/// A contact inquiry as accepted by the endpoint, after server-side
/// validation. Budget is carried verbatim and never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: InquiryAuthorName,
    pub email: InquiryEmail,
    pub message: InquiryMessage,
    pub budget: Option<String>,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct InquiryAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(regex = EMAIL_SHAPE_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct InquiryEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref)
)]
pub struct InquiryMessage(String);
