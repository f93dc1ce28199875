//! User entity - a contributor, moderator or administrator

use chrono::{DateTime, Utc};

use crate::value_objects::UserRole;

/// User account. The password hash never leaves the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub specialties: Vec<String>,
    pub github_username: Option<String>,
    pub twitter_username: Option<String>,
    pub linkedin_profile: Option<String>,
    pub prompts_created: i64,
    pub prompts_verified: i64,
    pub requests_handled: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Active users whose role allows verifying prompts
    #[inline]
    pub fn can_verify_prompts(&self) -> bool {
        self.is_active && self.role.can_verify_prompts()
    }

    /// Case-insensitive match against name, username and email.
    /// `needle` must already be lowercase.
    pub fn text_contains(&self, needle: &str) -> bool {
        [&self.name, &self.username, &self.email]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Data for a user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub specialties: Vec<String>,
    pub github_username: Option<String>,
    pub twitter_username: Option<String>,
    pub linkedin_profile: Option<String>,
}

impl NewUser {
    pub fn into_user(self, id: i64, password_hash: String, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            username: self.username,
            password_hash,
            role: self.role,
            is_active: true,
            bio: self.bio,
            website: self.website,
            avatar: self.avatar,
            location: self.location,
            specialties: self.specialties,
            github_username: self.github_username,
            twitter_username: self.twitter_username,
            linkedin_profile: self.linkedin_profile,
            prompts_created: 0,
            prompts_verified: 0,
            requests_handled: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
