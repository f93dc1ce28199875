//! List filters for prompts, requests and users

use super::{like_pattern, non_empty};
use crate::entities::{Prompt, PromptRequest, User};
use crate::value_objects::{Difficulty, Priority, RequestStatus, UserRole};

/// Optional predicates over prompts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilter {
    pub language: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub is_verified: Option<bool>,
    pub search: Option<String>,
}

impl PromptFilter {
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = non_empty(Some(language.into()));
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(Some(category.into()));
        self
    }

    pub fn with_verified(mut self, is_verified: bool) -> Self {
        self.is_verified = Some(is_verified);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_empty(Some(search.into()));
        self
    }

    /// ILIKE pattern for the search term, if any
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }

    pub fn matches(&self, prompt: &Prompt) -> bool {
        self.language.as_ref().is_none_or(|l| *l == prompt.language)
            && self.difficulty.is_none_or(|d| d == prompt.difficulty)
            && self.category.as_ref().is_none_or(|c| *c == prompt.category)
            && self.is_verified.is_none_or(|v| v == prompt.is_verified)
            && self
                .search
                .as_ref()
                .is_none_or(|s| prompt.text_contains(&s.to_lowercase()))
    }
}

/// Optional predicates over prompt requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub priority: Option<Priority>,
    pub requested_language: Option<String>,
    pub requested_difficulty: Option<Difficulty>,
    pub requested_category: Option<String>,
    pub is_urgent: Option<bool>,
    pub is_rejected: Option<bool>,
    pub assigned_to_id: Option<i64>,
    pub requester_email: Option<String>,
    pub search: Option<String>,
}

impl RequestFilter {
    /// Drop blank string predicates
    pub fn normalized(self) -> Self {
        Self {
            requested_language: non_empty(self.requested_language),
            requested_category: non_empty(self.requested_category),
            requester_email: non_empty(self.requester_email),
            search: non_empty(self.search),
            ..self
        }
    }

    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }

    pub fn matches(&self, request: &PromptRequest) -> bool {
        self.status.is_none_or(|s| s == request.status)
            && self.priority.is_none_or(|p| p == request.priority)
            && self
                .requested_language
                .as_ref()
                .is_none_or(|l| *l == request.requested_language)
            && self
                .requested_difficulty
                .is_none_or(|d| d == request.requested_difficulty)
            && self
                .requested_category
                .as_ref()
                .is_none_or(|c| *c == request.requested_category)
            && self.is_urgent.is_none_or(|u| u == request.is_urgent)
            && self.is_rejected.is_none_or(|r| r == request.is_rejected)
            && self
                .assigned_to_id
                .is_none_or(|id| Some(id) == request.assigned_to_id)
            && self
                .requester_email
                .as_ref()
                .is_none_or(|e| *e == request.requester_email)
            && self
                .search
                .as_ref()
                .is_none_or(|s| request.text_contains(&s.to_lowercase()))
    }
}

/// Optional predicates over users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl UserFilter {
    pub fn normalized(self) -> Self {
        Self {
            search: non_empty(self.search),
            ..self
        }
    }

    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }

    pub fn matches(&self, user: &User) -> bool {
        self.role.is_none_or(|r| r == user.role)
            && self.is_active.is_none_or(|a| a == user.is_active)
            && self
                .search
                .as_ref()
                .is_none_or(|s| user.text_contains(&s.to_lowercase()))
    }
}
