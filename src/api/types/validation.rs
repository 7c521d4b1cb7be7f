//! Request-shape validation at the HTTP boundary

use serde_json::Value;
use thiserror::Error;

use crate::domain::account::AccountValidationError;
use crate::domain::listing::ListingValidationError;

use super::error::ApiError;

/// A request parsed as JSON but is missing data or carries bad values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    #[error(transparent)]
    Account(#[from] AccountValidationError),

    #[error(transparent)]
    Listing(#[from] ListingValidationError),
}

impl From<RequestValidationError> for ApiError {
    fn from(err: RequestValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Read a text field. Strings pass through, numbers and booleans are taken
/// in their JSON spelling, arrays and objects are rejected.
pub fn text(field: &'static str, value: Option<Value>) -> Result<Option<String>, RequestValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(RequestValidationError::InvalidField(field)),
    }
}

/// Take a required text field; absent or blank values are rejected
pub fn require(field: &'static str, value: Option<Value>) -> Result<String, RequestValidationError> {
    match text(field, value)? {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RequestValidationError::MissingField(field)),
    }
}
