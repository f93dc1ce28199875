//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. Derived rules
//! cover lengths and formats; required fields are checked by the services
//! so the first missing field is reported by name.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Prompt Requests
// ============================================================================

/// Create prompt request
///
/// Enum-valued fields arrive as plain strings and are checked by the service.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreatePromptRequest {
    pub title: String,

    pub description: String,

    #[validate(length(max = 50, message = "language must be at most 50 characters"))]
    pub language: String,

    /// Empty means beginner
    pub difficulty: String,

    #[validate(length(max = 100, message = "category must be at most 100 characters"))]
    pub category: String,

    pub problem_statement: String,

    pub tags: Vec<String>,

    pub author_id: Option<i64>,

    #[validate(length(max = 100, message = "author name must be at most 100 characters"))]
    pub author_name: Option<String>,

    #[validate(
        email(message = "invalid author email"),
        length(max = 100, message = "author email must be at most 100 characters")
    )]
    pub author_email: Option<String>,
}

/// Partial prompt update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePromptRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 50, message = "language must be at most 50 characters"))]
    pub language: Option<String>,

    pub difficulty: Option<String>,

    #[validate(length(max = 100, message = "category must be at most 100 characters"))]
    pub category: Option<String>,

    pub problem_statement: Option<String>,

    pub tags: Option<Vec<String>>,
}

/// Verify prompt request
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPromptRequest {
    pub verifier_id: i64,
}

// ============================================================================
// Prompt Request (workflow) Requests
// ============================================================================

/// Public form submission for a new prompt
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitPromptRequest {
    #[validate(length(max = 100, message = "requester name must be at most 100 characters"))]
    pub requester_name: String,

    #[validate(
        email(message = "invalid requester email"),
        length(max = 100, message = "requester email must be at most 100 characters")
    )]
    pub requester_email: String,

    #[validate(length(max = 200, message = "requested title must be at most 200 characters"))]
    pub requested_title: String,

    #[validate(length(max = 50, message = "requested language must be at most 50 characters"))]
    pub requested_language: String,

    /// Unknown values become beginner
    pub requested_difficulty: String,

    #[validate(length(max = 100, message = "requested category must be at most 100 characters"))]
    pub requested_category: String,

    pub description: String,

    pub specific_requirements: Option<String>,

    pub use_case: Option<String>,

    pub preferred_topics: Option<String>,

    /// Unknown values become normal
    pub priority: String,

    pub is_urgent: bool,
}

/// Administrative update of a prompt request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TriagePromptRequest {
    pub status: Option<String>,

    pub priority: Option<String>,

    pub assigned_to_id: Option<i64>,

    pub assigned_by_id: Option<i64>,

    pub admin_notes: Option<String>,

    pub response_message: Option<String>,

    #[validate(range(min = 0, message = "estimated hours must not be negative"))]
    pub estimated_hours: Option<i32>,

    pub completed_prompt_id: Option<i64>,

    pub is_urgent: Option<bool>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: String,

    #[validate(
        email(message = "invalid email format"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    pub email: String,

    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,

    pub password: String,

    /// Unknown values become contributor
    pub role: String,

    pub bio: Option<String>,

    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
}

/// Profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(
        email(message = "invalid email format"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    pub email: Option<String>,

    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: Option<String>,

    pub bio: Option<String>,

    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,

    #[validate(url(message = "avatar must be a valid URL"))]
    pub avatar: Option<String>,

    #[validate(length(max = 100, message = "location must be at most 100 characters"))]
    pub location: Option<String>,

    pub specialties: Option<Vec<String>>,

    #[validate(length(max = 100, message = "github username must be at most 100 characters"))]
    pub github_username: Option<String>,

    #[validate(length(max = 100, message = "twitter username must be at most 100 characters"))]
    pub twitter_username: Option<String>,

    #[validate(url(message = "linkedin profile must be a valid URL"))]
    pub linkedin_profile: Option<String>,
}

/// Role and status change
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUpdateUserRequest {
    pub role: Option<String>,

    pub is_active: Option<bool>,
}

// ============================================================================
// List Queries
// ============================================================================

/// Parsed prompt list query
///
/// `page` and `limit` are raw; the service normalises them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptListQuery {
    pub language: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub is_verified: Option<bool>,
    pub page: i64,
    pub limit: i64,
}

/// Parsed prompt request list query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub requested_language: Option<String>,
    pub requested_difficulty: Option<String>,
    pub requested_category: Option<String>,
    pub is_urgent: Option<bool>,
    pub is_rejected: Option<bool>,
    pub assigned_to_id: Option<i64>,
    pub requester_email: Option<String>,
    pub search: Option<String>,
    pub page: i64,
    pub limit: i64,
}

/// Parsed user list query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub page: i64,
    pub limit: i64,
}
