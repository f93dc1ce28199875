//! Prompt service
//!
//! Listing, lookup, authoring, verification and the popular listing.

use chrono::Utc;
use prompt_core::{Difficulty, NewPrompt, PageRequest, PromptFilter};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CreatePromptRequest, PaginatedResponse, PromptListQuery, PromptResponse, UpdatePromptRequest,
    VerifyPromptRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validation::{check_title, non_blank, parse_difficulty, parse_filter, present, require, require_id};

/// Prompt service
pub struct PromptService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PromptService<'a> {
    /// Create a new PromptService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of prompts matching every supplied filter, newest first
    #[instrument(skip(self))]
    pub async fn list_prompts(
        &self,
        query: PromptListQuery,
    ) -> ServiceResult<PaginatedResponse<PromptResponse>> {
        let page = PageRequest::new(query.page, query.limit);
        let difficulty: Option<Difficulty> = parse_filter(query.difficulty, "invalid difficulty")?;

        let filter = PromptFilter {
            language: present(query.language),
            difficulty,
            category: present(query.category),
            is_verified: query.is_verified,
            search: present(query.search),
        };

        let result = self.ctx.prompt_repo().find_all(&filter, page).await?;
        Ok(PaginatedResponse::from_page(result, page))
    }

    /// Fetch one prompt and queue a view-count increment.
    ///
    /// The returned body reflects the row as read; the increment lands later.
    #[instrument(skip(self))]
    pub async fn get_prompt(&self, id: i64) -> ServiceResult<PromptResponse> {
        require_id(id, "invalid prompt id")?;

        let prompt = self
            .ctx
            .prompt_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prompt", id))?;

        self.ctx.view_counter().record(id);

        Ok(prompt.into())
    }

    /// Most viewed prompts; a limit outside `[1, 50]` becomes 10
    #[instrument(skip(self))]
    pub async fn popular_prompts(&self, limit: i64) -> ServiceResult<Vec<PromptResponse>> {
        let limit = PageRequest::popular_limit(limit);
        let prompts = self.ctx.prompt_repo().find_popular(limit).await?;
        Ok(prompts.into_iter().map(PromptResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_prompt(&self, request: CreatePromptRequest) -> ServiceResult<PromptResponse> {
        check_title(&request.title)?;
        require(&request.description, "description is required")?;
        require(&request.language, "language is required")?;
        require(&request.category, "category is required")?;
        require(&request.problem_statement, "problem statement is required")?;

        let request = CreatePromptRequest {
            author_name: non_blank(request.author_name),
            author_email: non_blank(request.author_email),
            ..request
        };
        request.validate()?;

        let difficulty = parse_difficulty(&request.difficulty)?;

        let new_prompt = NewPrompt {
            title: request.title.trim().to_string(),
            description: request.description,
            language: request.language.trim().to_string(),
            difficulty,
            category: request.category.trim().to_string(),
            problem_statement: request.problem_statement,
            tags: clean_tags(request.tags),
            author_id: request.author_id,
            author_name: request.author_name,
            author_email: request.author_email,
        };

        let prompt = self.ctx.prompt_repo().create(&new_prompt).await?;
        info!(prompt_id = prompt.id, "Prompt created");

        Ok(prompt.into())
    }

    /// Apply the supplied fields under the same rules as creation
    #[instrument(skip(self, request))]
    pub async fn update_prompt(
        &self,
        id: i64,
        request: UpdatePromptRequest,
    ) -> ServiceResult<PromptResponse> {
        require_id(id, "invalid prompt id")?;

        if let Some(title) = &request.title {
            check_title(title)?;
        }
        for (value, message) in [
            (&request.description, "description is required"),
            (&request.language, "language is required"),
            (&request.category, "category is required"),
            (&request.problem_statement, "problem statement is required"),
        ] {
            if let Some(value) = value {
                require(value, message)?;
            }
        }
        request.validate()?;
        let difficulty = request
            .difficulty
            .as_deref()
            .map(parse_difficulty)
            .transpose()?;

        let mut prompt = self
            .ctx
            .prompt_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prompt", id))?;

        if let Some(title) = request.title {
            prompt.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            prompt.description = description;
        }
        if let Some(language) = request.language {
            prompt.language = language.trim().to_string();
        }
        if let Some(difficulty) = difficulty {
            prompt.difficulty = difficulty;
        }
        if let Some(category) = request.category {
            prompt.category = category.trim().to_string();
        }
        if let Some(problem_statement) = request.problem_statement {
            prompt.problem_statement = problem_statement;
        }
        if let Some(tags) = request.tags {
            prompt.tags = clean_tags(tags);
        }
        prompt.updated_at = Utc::now();

        let prompt = self.ctx.prompt_repo().update(&prompt).await?;
        info!(prompt_id = id, "Prompt updated");

        Ok(prompt.into())
    }

    /// Mark a prompt verified by a user allowed to do so.
    ///
    /// Verifying an already verified prompt returns it unchanged.
    #[instrument(skip(self))]
    pub async fn verify_prompt(
        &self,
        id: i64,
        request: VerifyPromptRequest,
    ) -> ServiceResult<PromptResponse> {
        require_id(id, "invalid prompt id")?;
        require_id(request.verifier_id, "invalid verifier id")?;

        let mut prompt = self
            .ctx
            .prompt_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Prompt", id))?;

        let verifier = self
            .ctx
            .user_repo()
            .find_by_id(request.verifier_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.verifier_id))?;

        if !verifier.can_verify_prompts() {
            return Err(ServiceError::forbidden(
                "user is not allowed to verify prompts",
            ));
        }

        if prompt.is_verified {
            return Ok(prompt.into());
        }

        prompt.verify(verifier.id);
        let prompt = self.ctx.prompt_repo().update(&prompt).await?;

        if let Err(e) = self.ctx.user_repo().increment_prompts_verified(verifier.id).await {
            warn!(user_id = verifier.id, error = %e, "Failed to update verifier statistics");
        }

        info!(prompt_id = id, verifier_id = verifier.id, "Prompt verified");
        Ok(prompt.into())
    }

    /// Soft delete; a missing prompt is reported as not found
    #[instrument(skip(self))]
    pub async fn delete_prompt(&self, id: i64) -> ServiceResult<()> {
        require_id(id, "invalid prompt id")?;

        if !self.ctx.prompt_repo().exists(id).await? {
            return Err(ServiceError::not_found("Prompt", id));
        }

        self.ctx.prompt_repo().delete(id).await?;
        info!(prompt_id = id, "Prompt deleted");

        Ok(())
    }
}

/// Trim tags and drop empty ones
fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
