//! Ordered input checks shared by the services

use prompt_core::Difficulty;
use validator::ValidationErrors;

use super::error::{ServiceError, ServiceResult};

/// Maximum prompt title length in characters
pub(crate) const MAX_TITLE_LENGTH: usize = 200;

/// Fail with `message` when `value` is blank
pub(crate) fn require(value: &str, message: &'static str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        Err(ServiceError::validation(message))
    } else {
        Ok(())
    }
}

/// Ids are positive
pub(crate) fn require_id(id: i64, message: &'static str) -> ServiceResult<()> {
    if id <= 0 {
        Err(ServiceError::validation(message))
    } else {
        Ok(())
    }
}

/// Title rules shared by create and update
pub(crate) fn check_title(title: &str) -> ServiceResult<()> {
    require(title, "title is required")?;
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ServiceError::validation(
            "title must be less than 200 characters",
        ));
    }
    Ok(())
}

/// Trim and drop blank optional strings
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Drop blank optional strings, keeping supplied values untouched
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Empty means beginner; anything else must be a known level
pub(crate) fn parse_difficulty(value: &str) -> ServiceResult<Difficulty> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Difficulty::default());
    }
    value
        .parse()
        .map_err(|e: prompt_core::ParseEnumError| ServiceError::validation(e.to_string()))
}

/// Parse an optional list filter, reporting `message` for unknown values
pub(crate) fn parse_filter<T: std::str::FromStr>(
    value: Option<String>,
    message: &'static str,
) -> ServiceResult<Option<T>> {
    non_blank(value)
        .map(|v| v.parse().map_err(|_| ServiceError::validation(message)))
        .transpose()
}

/// Human readable summary of derive-based validation failures, ordered by field
pub(crate) fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    if messages.is_empty() {
        "invalid input".to_string()
    } else {
        messages.join("; ")
    }
}
