//! JSON extractor that only accepts a non-empty JSON object

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;

/// JSON extractor/response wrapper.
///
/// Any body that is unreadable, not valid JSON, not an object, an empty
/// object, or does not fit the target shape is rejected with
/// `400 {"error": true, "message": "Invalid JSON payload"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(error = %rejection.body_text(), "Failed to read request body");
            ApiError::invalid_payload()
        })?;

        parse_payload(&bytes).map(Json)
    }
}

/// Parse a request body into `T`, requiring a non-empty JSON object
pub fn parse_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, "Request body is not valid JSON");
        ApiError::invalid_payload()
    })?;

    match &value {
        Value::Object(map) if !map.is_empty() => {}
        _ => return Err(ApiError::invalid_payload()),
    }

    serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "Request body does not match the expected shape");
        ApiError::invalid_payload()
    })
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    fn rejected(body: &str) -> bool {
        match parse_payload::<Payload>(body.as_bytes()) {
            Err(err) => {
                err.status == StatusCode::BAD_REQUEST
                    && err.response.message == "Invalid JSON payload"
            }
            Ok(_) => false,
        }
    }

    #[test]
    fn test_accepts_object() {
        let payload: Payload = parse_payload(br#"{"name": "alice"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_accepts_object_with_only_unknown_fields() {
        let payload: Payload = parse_payload(br#"{"other": 1}"#).unwrap();
        assert!(payload.name.is_none());
    }

    #[test]
    fn test_rejects_unusable_bodies() {
        assert!(rejected(""));
        assert!(rejected("{}"));
        assert!(rejected("null"));
        assert!(rejected("[]"));
        assert!(rejected("\"text\""));
        assert!(rejected("{not json"));
        assert!(rejected(r#"{"name": 42}"#));
    }

    #[test]
    fn test_json_deref() {
        let json = Json("hello".to_string());
        assert_eq!(*json, "hello");
        assert_eq!(json.into_inner(), "hello");
    }
}
