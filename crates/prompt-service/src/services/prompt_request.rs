//! Prompt request service
//!
//! Public submissions and the administrative workflow around them. Status
//! updates are applied even when they skip the workflow graph; such moves
//! are logged so they can be audited.

use chrono::Utc;
use prompt_core::{
    Difficulty, NewPromptRequest, PageRequest, Priority, RequestFilter, RequestStatus,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    PaginatedResponse, PromptRequestResponse, RequestListQuery, SubmitPromptRequest,
    TriagePromptRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validation::{non_blank, parse_filter, require, require_id};

/// Prompt request service
pub struct PromptRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PromptRequestService<'a> {
    /// Create a new PromptRequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a public submission in the `pending` state
    #[instrument(skip(self, request), fields(requested_title = %request.requested_title))]
    pub async fn submit_request(
        &self,
        request: SubmitPromptRequest,
    ) -> ServiceResult<PromptRequestResponse> {
        require(&request.requester_name, "requester name is required")?;
        require(&request.requester_email, "requester email is required")?;
        require(&request.requested_title, "requested title is required")?;
        require(&request.requested_language, "requested language is required")?;
        require(&request.requested_category, "requested category is required")?;
        require(&request.description, "description is required")?;
        request.validate()?;

        let new_request = NewPromptRequest {
            requester_name: request.requester_name.trim().to_string(),
            requester_email: request.requester_email.trim().to_string(),
            requested_title: request.requested_title.trim().to_string(),
            requested_language: request.requested_language.trim().to_string(),
            requested_difficulty: Difficulty::parse_or_default(request.requested_difficulty.trim()),
            requested_category: request.requested_category.trim().to_string(),
            description: request.description,
            specific_requirements: non_blank(request.specific_requirements),
            use_case: non_blank(request.use_case),
            preferred_topics: non_blank(request.preferred_topics),
            priority: Priority::parse_or_default(request.priority.trim()),
            is_urgent: request.is_urgent,
        }
        .normalized();

        let stored = self.ctx.request_repo().create(&new_request).await?;
        info!(
            request_id = stored.id,
            priority = %stored.priority,
            "Prompt request submitted"
        );

        Ok(stored.into())
    }

    #[instrument(skip(self))]
    pub async fn list_requests(
        &self,
        query: RequestListQuery,
    ) -> ServiceResult<PaginatedResponse<PromptRequestResponse>> {
        let page = PageRequest::new(query.page, query.limit);
        let status: Option<RequestStatus> = parse_filter(query.status, "invalid status")?;
        let priority: Option<Priority> = parse_filter(query.priority, "invalid priority")?;
        let requested_difficulty: Option<Difficulty> =
            parse_filter(query.requested_difficulty, "invalid difficulty")?;

        let filter = RequestFilter {
            status,
            priority,
            requested_language: query.requested_language,
            requested_difficulty,
            requested_category: query.requested_category,
            is_urgent: query.is_urgent,
            is_rejected: query.is_rejected,
            assigned_to_id: query.assigned_to_id,
            requester_email: query.requester_email,
            search: query.search,
        }
        .normalized();

        let result = self.ctx.request_repo().find_all(&filter, page).await?;
        Ok(PaginatedResponse::from_page(result, page))
    }

    #[instrument(skip(self))]
    pub async fn get_request(&self, id: i64) -> ServiceResult<PromptRequestResponse> {
        require_id(id, "invalid request id")?;

        let request = self
            .ctx
            .request_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prompt request", id))?;

        Ok(request.into())
    }

    /// Administrative update: status, priority, assignment and notes
    #[instrument(skip(self, update))]
    pub async fn update_request(
        &self,
        id: i64,
        update: TriagePromptRequest,
    ) -> ServiceResult<PromptRequestResponse> {
        require_id(id, "invalid request id")?;
        update.validate()?;

        let status: Option<RequestStatus> = parse_filter(update.status, "invalid status")?;
        let priority: Option<Priority> = parse_filter(update.priority, "invalid priority")?;
        if let Some(assignee) = update.assigned_to_id {
            require_id(assignee, "invalid assignee id")?;
        }
        if let Some(prompt_id) = update.completed_prompt_id {
            require_id(prompt_id, "invalid completed prompt id")?;
        }

        let mut request = self
            .ctx
            .request_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prompt request", id))?;

        let now = Utc::now();

        if let Some(next) = status {
            if !request.status.can_transition_to(next) {
                warn!(
                    request_id = id,
                    from = %request.status,
                    to = %next,
                    "Status change outside the request workflow"
                );
            }
            request.set_status(next, now);
        }

        if let Some(priority) = priority {
            request.priority = priority;
        }

        if let Some(assignee) = update.assigned_to_id {
            if self.ctx.user_repo().find_by_id(assignee).await?.is_none() {
                return Err(ServiceError::not_found("User", assignee));
            }
            request.assign(assignee, update.assigned_by_id, now);
        }

        if let Some(prompt_id) = update.completed_prompt_id {
            if !self.ctx.prompt_repo().exists(prompt_id).await? {
                return Err(ServiceError::not_found("Prompt", prompt_id));
            }
            request.completed_prompt_id = Some(prompt_id);
        }

        if let Some(notes) = update.admin_notes {
            request.admin_notes = Some(notes);
        }
        if let Some(message) = update.response_message {
            request.response_message = Some(message);
        }
        if let Some(hours) = update.estimated_hours {
            request.estimated_hours = Some(hours);
        }
        if let Some(is_urgent) = update.is_urgent {
            request.is_urgent = is_urgent;
        }
        request.updated_at = now;

        let stored = self.ctx.request_repo().update(&request).await?;
        info!(request_id = id, status = %stored.status, "Prompt request updated");

        Ok(stored.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_request(&self, id: i64) -> ServiceResult<()> {
        require_id(id, "invalid request id")?;

        if !self.ctx.request_repo().exists(id).await? {
            return Err(ServiceError::not_found("Prompt request", id));
        }

        self.ctx.request_repo().delete(id).await?;
        info!(request_id = id, "Prompt request deleted");

        Ok(())
    }
}
