//! Prompt request workflow status and priority
//!
//! Workflow:
//!
//! ```text
//! pending -> in_review -> approved -> assigned -> in_progress -> completed
//!     \__________\___________\___________\____________\-> rejected | on_hold
//! ```
//!
//! `completed` and `rejected` are terminal. `on_hold` resumes to an active state.
//! Writes are not restricted to this graph; `can_transition_to` only describes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

/// Status of a prompt request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    InReview,
    Approved,
    Assigned,
    InProgress,
    Completed,
    Rejected,
    OnHold,
}

impl RequestStatus {
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::InReview,
        Self::Approved,
        Self::Assigned,
        Self::InProgress,
        Self::Completed,
        Self::Rejected,
        Self::OnHold,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::OnHold => "on_hold",
        }
    }

    /// Parse a status, falling back to `Pending` for empty or unknown input
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Completed and rejected requests never move again in the workflow
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// States on the main line of the workflow
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::InReview | Self::Approved | Self::Assigned | Self::InProgress
        )
    }

    /// The next state on the main line, if any
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::InReview),
            Self::InReview => Some(Self::Approved),
            Self::Approved => Some(Self::Assigned),
            Self::Assigned => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed | Self::Rejected | Self::OnHold => None,
        }
    }

    /// Whether `next` is reachable from `self` in one step of the workflow graph
    pub fn can_transition_to(self, next: Self) -> bool {
        if self == next {
            return true;
        }
        if self.is_terminal() {
            return false;
        }
        match next {
            Self::Rejected | Self::OnHold => true,
            _ if self == Self::OnHold => next.is_active(),
            _ => self.next() == Some(next),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("status", s))
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a prompt request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Normal, Self::High, Self::Urgent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Parse a priority, falling back to `Normal` for empty or unknown input
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("priority", s))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
