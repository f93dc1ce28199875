//! Prompt request entity - a user's ask for a new prompt

use chrono::{DateTime, Utc};

use crate::value_objects::{Difficulty, Priority, RequestStatus};

/// A request for a new prompt to be written
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
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

impl PromptRequest {
    /// Move to `next`, applying the status side effects.
    ///
    /// Completion is stamped once. `is_rejected` follows whether the request is rejected.
    pub fn set_status(&mut self, next: RequestStatus, now: DateTime<Utc>) {
        if next == RequestStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.is_rejected = next == RequestStatus::Rejected;
        self.status = next;
        self.updated_at = now;
    }

    /// Assign the request to a user
    pub fn assign(&mut self, assignee_id: i64, assigner_id: Option<i64>, now: DateTime<Utc>) {
        self.assigned_to_id = Some(assignee_id);
        if assigner_id.is_some() {
            self.assigned_by_id = assigner_id;
        }
        self.assigned_at = Some(now);
        self.updated_at = now;
    }

    /// Case-insensitive match against requested title and description.
    /// `needle` must already be lowercase.
    pub fn text_contains(&self, needle: &str) -> bool {
        [&self.requested_title, &self.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Data for a request that has not been stored yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPromptRequest {
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
    pub priority: Priority,
    pub is_urgent: bool,
}

impl NewPromptRequest {
    /// Apply creation rules: an urgent request at normal priority is raised to high
    pub fn normalized(mut self) -> Self {
        if self.is_urgent && self.priority == Priority::Normal {
            self.priority = Priority::High;
        }
        self
    }

    /// Materialise a stored request in the `pending` state
    pub fn into_request(self, id: i64, now: DateTime<Utc>) -> PromptRequest {
        let new = self.normalized();
        PromptRequest {
            id,
            requester_name: new.requester_name,
            requester_email: new.requester_email,
            requested_title: new.requested_title,
            requested_language: new.requested_language,
            requested_difficulty: new.requested_difficulty,
            requested_category: new.requested_category,
            description: new.description,
            specific_requirements: new.specific_requirements,
            use_case: new.use_case,
            preferred_topics: new.preferred_topics,
            status: RequestStatus::Pending,
            priority: new.priority,
            assigned_to_id: None,
            assigned_by_id: None,
            assigned_at: None,
            completed_prompt_id: None,
            completed_at: None,
            admin_notes: None,
            response_message: None,
            is_urgent: new.is_urgent,
            is_rejected: false,
            estimated_hours: None,
            created_at: now,
            updated_at: now,
        }
    }
}
