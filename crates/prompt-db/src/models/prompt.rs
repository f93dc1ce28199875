//! Prompt database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the prompts table
#[derive(Debug, Clone, FromRow)]
pub struct PromptModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: String,
    pub category: String,
    pub problem_statement: String,
    pub is_verified: bool,
    pub verified_by: Option<i64>,
    pub verified_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub like_count: i64,
    pub difficulty_vote: f64,
    /// JSON array of strings
    pub tags: String,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
