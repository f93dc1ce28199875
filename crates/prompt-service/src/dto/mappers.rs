//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use prompt_core::{Page, PageRequest, Prompt, PromptRequest, User};

use super::responses::{PaginatedResponse, PromptRequestResponse, PromptResponse, UserResponse};

// ============================================================================
// Prompt Mappers
// ============================================================================

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            description: prompt.description,
            language: prompt.language,
            difficulty: prompt.difficulty,
            category: prompt.category,
            problem_statement: prompt.problem_statement,
            is_verified: prompt.is_verified,
            verified_by: prompt.verified_by,
            verified_at: prompt.verified_at,
            view_count: prompt.view_count,
            like_count: prompt.like_count,
            difficulty_vote: prompt.difficulty_vote,
            tags: prompt.tags,
            author_id: prompt.author_id,
            author_name: prompt.author_name,
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}

// ============================================================================
// Prompt Request Mappers
// ============================================================================

impl From<PromptRequest> for PromptRequestResponse {
    fn from(request: PromptRequest) -> Self {
        Self {
            id: request.id,
            requester_name: request.requester_name,
            requester_email: request.requester_email,
            requested_title: request.requested_title,
            requested_language: request.requested_language,
            requested_difficulty: request.requested_difficulty,
            requested_category: request.requested_category,
            description: request.description,
            specific_requirements: request.specific_requirements,
            use_case: request.use_case,
            preferred_topics: request.preferred_topics,
            status: request.status,
            priority: request.priority,
            assigned_to_id: request.assigned_to_id,
            assigned_by_id: request.assigned_by_id,
            assigned_at: request.assigned_at,
            completed_prompt_id: request.completed_prompt_id,
            completed_at: request.completed_at,
            admin_notes: request.admin_notes,
            response_message: request.response_message,
            is_urgent: request.is_urgent,
            is_rejected: request.is_rejected,
            estimated_hours: request.estimated_hours,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            role: user.role,
            is_active: user.is_active,
            bio: user.bio,
            website: user.website,
            avatar: user.avatar,
            location: user.location,
            specialties: user.specialties,
            github_username: user.github_username,
            twitter_username: user.twitter_username,
            linkedin_profile: user.linkedin_profile,
            prompts_created: user.prompts_created,
            prompts_verified: user.prompts_verified,
            requests_handled: user.requests_handled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

impl<T> PaginatedResponse<T> {
    /// Convert a repository page, computing `total_pages` from the request
    pub fn from_page<E>(page: Page<E>, request: PageRequest) -> Self
    where
        T: From<E>,
    {
        Self {
            total_pages: request.total_pages(page.total),
            total: page.total,
            page: request.page(),
            limit: request.limit(),
            data: page.items.into_iter().map(T::from).collect(),
        }
    }
}
