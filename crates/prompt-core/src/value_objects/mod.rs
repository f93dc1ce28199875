//! Value objects - closed enumerations used by the entities

mod difficulty;
mod request_status;
mod role;

pub use difficulty::Difficulty;
pub use request_status::{Priority, RequestStatus};
pub use role::{Capabilities, UserRole};

use thiserror::Error;

/// Error returned when a string is not one of an enumeration's values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
