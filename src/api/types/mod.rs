//! Request/response plumbing shared by all endpoints

pub mod error;
pub mod json;
pub mod validation;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use validation::{require, text, RequestValidationError};
