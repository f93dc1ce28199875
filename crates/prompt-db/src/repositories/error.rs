//! Error handling utilities for repositories

use prompt_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Unique index on live users' email
pub const USERS_EMAIL_UNIQUE: &str = "users_email_unique";
/// Unique index on live users' username
pub const USERS_USERNAME_UNIQUE: &str = "users_username_unique";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the matching conflict error
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    let conflict = e
        .as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| match db_err.constraint() {
            Some(USERS_EMAIL_UNIQUE) => Some(DomainError::EmailAlreadyExists),
            Some(USERS_USERNAME_UNIQUE) => Some(DomainError::UsernameAlreadyExists),
            _ => None,
        });

    conflict.unwrap_or_else(|| map_db_error(e))
}
