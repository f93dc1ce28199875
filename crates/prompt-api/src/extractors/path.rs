//! Path id parsing

use crate::response::ApiError;

/// Parse a path segment as a positive id.
///
/// `message` is the client-facing error, e.g. "Invalid prompt ID".
pub fn parse_id(raw: &str, message: &'static str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId(message)),
    }
}
