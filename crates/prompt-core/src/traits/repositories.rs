//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Soft-deleted rows are invisible through
//! every method.

use async_trait::async_trait;

use crate::entities::{NewPrompt, NewPromptRequest, NewUser, Prompt, PromptRequest, User};
use crate::error::DomainError;
use crate::query::{Page, PageRequest, PromptFilter, RequestFilter, UserFilter};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Prompt Repository
// ============================================================================

#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// One page of matching prompts, newest first, plus the total match count
    async fn find_all(&self, filter: &PromptFilter, page: PageRequest) -> RepoResult<Page<Prompt>>;

    /// Find prompt by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Prompt>>;

    /// Most viewed prompts
    async fn find_popular(&self, limit: i64) -> RepoResult<Vec<Prompt>>;

    /// Insert a new prompt and return the stored row
    async fn create(&self, prompt: &NewPrompt) -> RepoResult<Prompt>;

    /// Persist the editable fields of an existing prompt
    async fn update(&self, prompt: &Prompt) -> RepoResult<Prompt>;

    /// Soft delete a prompt
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Check whether a live prompt exists
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Add one to the view counter
    async fn increment_view_count(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Prompt Request Repository
// ============================================================================

#[async_trait]
pub trait PromptRequestRepository: Send + Sync {
    async fn find_all(
        &self,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RepoResult<Page<PromptRequest>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<PromptRequest>>;

    /// Insert a new request in the `pending` state
    async fn create(&self, request: &NewPromptRequest) -> RepoResult<PromptRequest>;

    /// Persist workflow and triage fields of an existing request
    async fn update(&self, request: &PromptRequest) -> RepoResult<PromptRequest>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn exists(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self, filter: &UserFilter, page: PageRequest) -> RepoResult<Page<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Check if email is already taken by a live user
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken by a live user
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update profile, role and status fields
    async fn update(&self, user: &User) -> RepoResult<User>;

    /// Soft delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Add one to the user's verified prompt counter
    async fn increment_prompts_verified(&self, id: i64) -> RepoResult<()>;
}
