//! Prompt entity - a stored coding challenge

use chrono::{DateTime, Utc};

use crate::value_objects::Difficulty;

/// A coding prompt as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub problem_statement: String,
    pub is_verified: bool,
    pub verified_by: Option<i64>,
    pub verified_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub like_count: i64,
    pub difficulty_vote: f64,
    pub tags: Vec<String>,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// Mark the prompt verified by the given user
    pub fn verify(&mut self, verifier_id: i64) {
        let now = Utc::now();
        self.is_verified = true;
        self.verified_by = Some(verifier_id);
        self.verified_at = Some(now);
        self.updated_at = now;
    }

    /// Case-insensitive substring match against title, description and problem statement.
    /// `needle` must already be lowercase.
    pub fn text_contains(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.problem_statement]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Data for a prompt that has not been stored yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPrompt {
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub problem_statement: String,
    pub tags: Vec<String>,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl NewPrompt {
    /// Materialise a stored prompt with fresh counters
    pub fn into_prompt(self, id: i64, now: DateTime<Utc>) -> Prompt {
        Prompt {
            id,
            title: self.title,
            description: self.description,
            language: self.language,
            difficulty: self.difficulty,
            category: self.category,
            problem_statement: self.problem_statement,
            is_verified: false,
            verified_by: None,
            verified_at: None,
            view_count: 0,
            like_count: 0,
            difficulty_vote: 0.0,
            tags: self.tags,
            author_id: self.author_id,
            author_name: self.author_name,
            author_email: self.author_email,
            created_at: now,
            updated_at: now,
        }
    }
}
