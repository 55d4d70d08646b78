pub mod email_address;
pub mod form;
pub mod inquiry;
