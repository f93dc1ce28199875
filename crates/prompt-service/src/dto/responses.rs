//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Timestamps serialize as RFC 3339 strings.

use chrono::{DateTime, Utc};
use prompt_core::{Difficulty, Priority, RequestStatus, UserRole};
use serde::Serialize;

use crate::services::ViewCounterStats;

// ============================================================================
// Common Response Types
// ============================================================================

/// Uniform response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
            data: None,
            error: Some(code.into()),
        }
    }
}

/// Offset pagination result
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

// ============================================================================
// Prompt Responses
// ============================================================================

/// Prompt response. The author's email is never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct PromptResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub problem_statement: String,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub like_count: i64,
    pub difficulty_vote: f64,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Prompt Request Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PromptRequestResponse {
    pub id: i64,
    pub requester_name: String,
    pub requester_email: String,
    pub requested_title: String,
    pub requested_language: String,
    pub requested_difficulty: Difficulty,
    pub requested_category: String,
    pub description: String,
    pub specific_requirements: Option<String>,
    pub use_case: Option<String>,
    pub preferred_topics: Option<String>,
    pub status: RequestStatus,
    pub priority: Priority,
    pub assigned_to_id: Option<i64>,
    pub assigned_by_id: Option<i64>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub completed_prompt_id: Option<i64>,
    pub completed_at: Option<DateTime<Utc>>,
    pub admin_notes: Option<String>,
    pub response_message: Option<String>,
    pub is_urgent: bool,
    pub is_rejected: bool,
    pub estimated_hours: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// User response (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
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

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: "Prompt Gallery API is running",
        }
    }
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
    pub view_counter: ViewCounterStats,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
    pub view_counter: &'static str,
}

impl ReadinessResponse {
    pub fn new(database_ok: bool, view_counter_ok: bool, view_counter: ViewCounterStats) -> Self {
        let label = |ok: bool| if ok { "healthy" } else { "unhealthy" };
        Self {
            status: if database_ok && view_counter_ok {
                "ready"
            } else {
                "not_ready"
            },
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label(database_ok),
                view_counter: label(view_counter_ok),
            },
            view_counter,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
