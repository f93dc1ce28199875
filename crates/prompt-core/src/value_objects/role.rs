//! User roles and the capabilities they grant
//!
//! Each role's capability set contains the one of every role below it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

bitflags! {
    /// Actions a user may perform
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Author new prompts
        const CREATE_PROMPTS  = 1 << 0;
        /// Mark prompts as verified
        const VERIFY_PROMPTS  = 1 << 1;
        /// Triage and assign prompt requests
        const MANAGE_REQUESTS = 1 << 2;
        /// Change other users' roles and status
        const MANAGE_USERS    = 1 << 3;
    }
}

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Contributor,
    Moderator,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub const ALL: [Self; 4] = [
        Self::Contributor,
        Self::Moderator,
        Self::Admin,
        Self::SuperAdmin,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contributor => "contributor",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Parse a role, falling back to `Contributor` for empty or unknown input
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Capability set granted by this role
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::Contributor => Capabilities::CREATE_PROMPTS,
            Self::Moderator => Capabilities::CREATE_PROMPTS
                .union(Capabilities::VERIFY_PROMPTS)
                .union(Capabilities::MANAGE_REQUESTS),
            Self::Admin | Self::SuperAdmin => Capabilities::all(),
        }
    }

    #[inline]
    pub fn can_create_prompts(self) -> bool {
        self.capabilities().contains(Capabilities::CREATE_PROMPTS)
    }

    #[inline]
    pub fn can_verify_prompts(self) -> bool {
        self.capabilities().contains(Capabilities::VERIFY_PROMPTS)
    }

    #[inline]
    pub fn can_manage_requests(self) -> bool {
        self.capabilities().contains(Capabilities::MANAGE_REQUESTS)
    }

    #[inline]
    pub fn can_manage_users(self) -> bool {
        self.capabilities().contains(Capabilities::MANAGE_USERS)
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("role", s))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
