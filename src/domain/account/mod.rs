//! Account domain
//!
//! Accounts are created by self-service signup and read back when a user
//! authenticates. The stored credential is always a salted hash.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountType, NewAccount};
pub use repository::AccountRepository;
pub use validation::{
    normalize_email, validate_email, validate_password, validate_password_hash, validate_username,
    AccountValidationError,
};

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
