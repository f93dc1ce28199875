//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    /// JSON array of strings
    pub specialties: String,
    pub github_username: Option<String>,
    pub twitter_username: Option<String>,
    pub linkedin_profile: Option<String>,
    pub prompts_created: i64,
    pub prompts_verified: i64,
    pub requests_handled: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

