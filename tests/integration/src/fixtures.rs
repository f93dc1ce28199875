//! Request fixtures
//!
//! Each builder returns a valid payload; tests override single fields.

use std::sync::atomic::{AtomicU64, Ordering};

use prompt_service::{CreatePromptRequest, CreateUserRequest, SubmitPromptRequest};
use serde_json::{json, Value};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Suffix unique within the test binary, for emails and usernames
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn create_prompt_request(title: &str) -> CreatePromptRequest {
    CreatePromptRequest {
        title: title.to_string(),
        description: "Reverse a singly linked list".to_string(),
        language: "rust".to_string(),
        difficulty: "intermediate".to_string(),
        category: "algorithms".to_string(),
        problem_statement: "Given the head of a list, return it reversed.".to_string(),
        tags: vec!["lists".to_string(), "pointers".to_string()],
        author_name: Some("Grace".to_string()),
        author_email: Some("grace@example.com".to_string()),
        ..Default::default()
    }
}

pub fn submit_request(title: &str) -> SubmitPromptRequest {
    SubmitPromptRequest {
        requester_name: "Ada".to_string(),
        requester_email: format!("ada{}@example.com", unique_suffix()),
        requested_title: title.to_string(),
        requested_language: "go".to_string(),
        requested_category: "concurrency".to_string(),
        description: "A worker pool exercise".to_string(),
        ..Default::default()
    }
}

pub fn create_user_request(role: &str) -> CreateUserRequest {
    let n = unique_suffix();
    CreateUserRequest {
        name: format!("User {n}"),
        email: format!("user{n}@example.com"),
        username: format!("user_{n}"),
        password: TEST_PASSWORD.to_string(),
        role: role.to_string(),
        ..Default::default()
    }
}

// JSON bodies for the HTTP tests

pub fn prompt_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Reverse a singly linked list",
        "language": "rust",
        "difficulty": "intermediate",
        "category": "algorithms",
        "problem_statement": "Given the head of a list, return it reversed.",
        "tags": ["lists"],
        "author_name": "Grace",
        "author_email": "grace@example.com"
    })
}

pub fn request_body(title: &str) -> Value {
    json!({
        "requester_name": "Ada",
        "requester_email": format!("ada{}@example.com", unique_suffix()),
        "requested_title": title,
        "requested_language": "go",
        "requested_category": "concurrency",
        "description": "A worker pool exercise"
    })
}

pub fn user_body(role: &str) -> Value {
    let n = unique_suffix();
    json!({
        "name": format!("User {n}"),
        "email": format!("user{n}@example.com"),
        "username": format!("user_{n}"),
        "password": TEST_PASSWORD,
        "role": role
    })
}
