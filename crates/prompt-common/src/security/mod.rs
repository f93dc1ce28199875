//! Credential handling

mod password;

pub use password::{hash_password, validate_password, verify_password, MIN_PASSWORD_LENGTH};
