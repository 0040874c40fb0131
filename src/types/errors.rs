use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price error: value is an empty string")]
    Empty,
    #[error("Price error: '{0}' is not a number")]
    InvalidNumber(String)
}
