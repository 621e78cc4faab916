use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("phone number is empty")]
    EmptyPhone,
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid link host: {0}")]
    InvalidLinkHost(String),
}
