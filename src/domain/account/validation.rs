//! Account validation utilities

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Username contains invalid character: '{0}'. Only alphanumeric characters, underscores, hyphens and dots are allowed")]
    InvalidUsernameCharacter(char),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),

    #[error("Stored credential must be a password hash")]
    UnhashedPassword,
}

const MAX_USERNAME_LENGTH: usize = 50;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Only alphanumeric characters, underscores, hyphens and dots
pub fn validate_username(username: &str) -> Result<(), AccountValidationError> {
    if username.is_empty() {
        return Err(AccountValidationError::EmptyUsername);
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AccountValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    for c in username.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '-' && c != '.' {
            return Err(AccountValidationError::InvalidUsernameCharacter(c));
        }
    }

    Ok(())
}

/// Canonical form of an email address: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email address
///
/// Rules:
/// - Cannot be empty
/// - Maximum 254 characters
/// - Must be a well-formed address (HTML5 email rules)
pub fn validate_email(email: &str) -> Result<(), AccountValidationError> {
    if email.is_empty() {
        return Err(AccountValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AccountValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !email.validate_email() {
        return Err(AccountValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a raw password before it is hashed
pub fn validate_password(password: &str) -> Result<(), AccountValidationError> {
    if password.is_empty() {
        return Err(AccountValidationError::EmptyPassword);
    }

    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Check that a credential about to be stored is a PHC-format hash
pub fn validate_password_hash(hash: &str) -> Result<(), AccountValidationError> {
    let segments: Vec<&str> = hash.split('$').collect();

    // PHC strings start with '$': ["", algorithm, ..., salt, hash]
    match segments.as_slice() {
        ["", algorithm, _, _, ..] if !algorithm.is_empty() => Ok(()),
        _ => Err(AccountValidationError::UnhashedPassword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a").is_ok());
        assert!(validate_username("john_doe").is_ok());
        assert!(validate_username("jane.doe-2").is_ok());
        assert!(validate_username(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert_eq!(
            validate_username(""),
            Err(AccountValidationError::EmptyUsername)
        );
        assert_eq!(
            validate_username(&"a".repeat(51)),
            Err(AccountValidationError::UsernameTooLong(50))
        );
        assert_eq!(
            validate_username("john doe"),
            Err(AccountValidationError::InvalidUsernameCharacter(' '))
        );
        assert_eq!(
            validate_username("user@name"),
            Err(AccountValidationError::InvalidUsernameCharacter('@'))
        );
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(AccountValidationError::EmptyEmail));
        assert_eq!(
            validate_email("no-at-sign"),
            Err(AccountValidationError::InvalidEmail)
        );
        assert_eq!(validate_email("@x.com"), Err(AccountValidationError::InvalidEmail));
        assert_eq!(validate_email("a@x..com"), Err(AccountValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b@x.com"), Err(AccountValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@x.com"), Err(AccountValidationError::InvalidEmail));
        assert_eq!(
            validate_email(&format!("{}@x.com", "a".repeat(250))),
            Err(AccountValidationError::EmailTooLong(254))
        );
    }

    #[test]
    fn test_malformed_domains_and_local_parts() {
        for email in ["a@-x-.com", "a@ex_ample.com", "a@x.-com", "<a>@x.com"] {
            assert_eq!(
                validate_email(email),
                Err(AccountValidationError::InvalidEmail),
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.COM "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("secret1").is_ok());
        assert_eq!(validate_password(""), Err(AccountValidationError::EmptyPassword));
        assert_eq!(
            validate_password(&"p".repeat(129)),
            Err(AccountValidationError::PasswordTooLong(128))
        );
    }

    #[test]
    fn test_password_hash_shape() {
        assert!(validate_password_hash("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA").is_ok());
        assert_eq!(
            validate_password_hash("secret1"),
            Err(AccountValidationError::UnhashedPassword)
        );
        assert_eq!(
            validate_password_hash("$argon2id"),
            Err(AccountValidationError::UnhashedPassword)
        );
        assert_eq!(
            validate_password_hash(""),
            Err(AccountValidationError::UnhashedPassword)
        );
    }
}
