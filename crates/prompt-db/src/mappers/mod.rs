//! Model to entity mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - String list columns are JSON arrays in TEXT; malformed values read as empty

mod prompt;
mod prompt_request;
mod user;

use prompt_core::{DomainError, RepoResult};

/// Decode a JSON string array column, treating malformed data as empty
pub fn decode_string_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode a string list for a JSON TEXT column
pub fn encode_string_list(values: &[String]) -> RepoResult<String> {
    serde_json::to_string(values).map_err(|e| DomainError::InternalError(e.to_string()))
}
