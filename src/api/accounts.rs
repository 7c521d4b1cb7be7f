//! Signup and authentication endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::types::{require, text, ApiError, Json, RequestValidationError};
use crate::domain::account::{
    normalize_email, validate_email, validate_password, validate_username, Account, AccountType,
    NewAccount,
};

/// Signup request
#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Signup fields after presence checks
struct SignupFields {
    username: String,
    email: String,
    password: String,
}

impl SignupRequest {
    /// Every check that does not touch storage runs here, before the password is hashed
    fn validate(self) -> Result<SignupFields, RequestValidationError> {
        let username = require("username", self.username)?;
        let email = normalize_email(&require("email", self.email)?);
        let password = required_password(self.password)?;

        validate_username(&username)?;
        validate_email(&email)?;
        validate_password(&password)?;

        Ok(SignupFields {
            username,
            email,
            password,
        })
    }
}

/// Passwords are taken verbatim: surrounding whitespace is significant
fn required_password(value: Option<Value>) -> Result<String, RequestValidationError> {
    text("password", value)?
        .filter(|p| !p.is_empty())
        .ok_or(RequestValidationError::MissingField("password"))
}

/// Authentication request
#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

impl std::fmt::Debug for AuthenticateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticateRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Account fields safe to expose
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub username: String,
    pub email: String,
    pub account_type: String,
    pub created_at: String,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            username: account.username().to_string(),
            email: account.email().to_string(),
            account_type: account.account_type().to_string(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

/// Success envelope for signup and authentication
#[derive(Debug, Serialize)]
pub struct AccountEnvelope {
    pub error: bool,
    pub message: String,
    pub account: AccountResponse,
}

impl AccountEnvelope {
    fn new(message: impl Into<String>, account: &Account) -> Self {
        Self {
            error: false,
            message: message.into(),
            account: AccountResponse::from_account(account),
        }
    }
}

/// Register a self-service account
///
/// POST /signup
///
/// The password is hashed here, before it reaches the account service.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AccountEnvelope>), ApiError> {
    let fields = request.validate()?;
    let password_hash = state.password_hasher.hash(&fields.password)?;

    let account = state
        .account_service
        .signup(NewAccount {
            username: fields.username,
            password_hash,
            email: fields.email,
            account_type: AccountType::User,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountEnvelope::new("Account created", &account)),
    ))
}

/// Verify a username and password
///
/// POST /authenticate
///
/// The raw password is forwarded: salted hashes cannot be compared by equality.
/// No session or token is issued.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthenticateRequest>,
) -> Result<Json<AccountEnvelope>, ApiError> {
    let username = require("username", request.username)?;
    let password = required_password(request.password)?;

    let account = state
        .account_service
        .authenticate(&username, &password)
        .await?;

    Ok(Json(AccountEnvelope::new("Authenticated", &account)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountValidationError;

    fn signup_request(username: Option<&str>, email: Option<&str>, password: Option<&str>) -> SignupRequest {
        SignupRequest {
            username: username.map(Value::from),
            email: email.map(Value::from),
            password: password.map(Value::from),
        }
    }

    #[test]
    fn test_signup_request_debug_redacts_password() {
        let request = signup_request(Some("alice"), Some("a@x.com"), Some("secret1"));
        let debug = format!("{:?}", request);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret1"));
    }

    #[test]
    fn test_signup_validation_reports_first_missing_field() {
        let err = signup_request(None, Some("a@x.com"), Some("secret1"))
            .validate()
            .err()
            .unwrap();
        assert_eq!(err, RequestValidationError::MissingField("username"));

        let err = signup_request(Some("alice"), None, Some("secret1"))
            .validate()
            .err()
            .unwrap();
        assert_eq!(err, RequestValidationError::MissingField("email"));

        let err = signup_request(Some("alice"), Some("a@x.com"), Some(""))
            .validate()
            .err()
            .unwrap();
        assert_eq!(err, RequestValidationError::MissingField("password"));
    }

    #[test]
    fn test_signup_validation_checks_username_and_email_shape() {
        let err = signup_request(Some("al ice"), Some("a@x.com"), Some("secret1"))
            .validate()
            .err()
            .unwrap();
        assert_eq!(
            err,
            RequestValidationError::Account(AccountValidationError::InvalidUsernameCharacter(' '))
        );

        let err = signup_request(Some("alice"), Some("a@ex_ample.com"), Some("secret1"))
            .validate()
            .err()
            .unwrap();
        assert_eq!(
            err,
            RequestValidationError::Account(AccountValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_signup_validation_normalizes_email() {
        let fields = signup_request(Some("alice"), Some(" A@X.COM"), Some(" secret1 "))
            .validate()
            .unwrap();

        assert_eq!(fields.email, "a@x.com");
        assert_eq!(fields.password, " secret1 ");
    }

    #[test]
    fn test_signup_validation_rejects_structured_password() {
        let mut request = signup_request(Some("alice"), Some("a@x.com"), None);
        request.password = Some(serde_json::json!(["secret1"]));

        assert_eq!(
            request.validate().err().unwrap(),
            RequestValidationError::InvalidField("password")
        );
    }

    #[test]
    fn test_signup_validation_rejects_long_password() {
        let long = "p".repeat(200);
        let result = signup_request(Some("alice"), Some("a@x.com"), Some(&long)).validate();

        assert!(matches!(result, Err(RequestValidationError::Account(_))));
    }

    #[test]
    fn test_account_response_is_camel_case() {
        let account = Account::new(NewAccount {
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            email: "a@x.com".to_string(),
            account_type: AccountType::User,
        });

        let json = serde_json::to_value(AccountEnvelope::new("Account created", &account)).unwrap();

        assert_eq!(json["error"], false);
        assert_eq!(json["account"]["accountType"], "user");
        assert!(json["account"].get("passwordHash").is_none());
        assert!(!json.to_string().contains("argon2"));
    }
}
