//! Prompt request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the prompt_requests table
#[derive(Debug, Clone, FromRow)]
pub struct PromptRequestModel {
    pub id: i64,
    pub requester_name: String,
    pub requester_email: String,
    pub requested_title: String,
    pub requested_language: String,
    pub requested_difficulty: String,
    pub requested_category: String,
    pub description: String,
    pub specific_requirements: Option<String>,
    pub use_case: Option<String>,
    pub preferred_topics: Option<String>,
    pub status: String,
    pub priority: String,
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
    pub deleted_at: Option<DateTime<Utc>>,
}
