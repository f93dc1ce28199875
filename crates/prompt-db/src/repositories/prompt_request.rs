//! PostgreSQL implementation of PromptRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use prompt_core::entities::{NewPromptRequest, PromptRequest};
use prompt_core::error::DomainError;
use prompt_core::query::{Page, PageRequest, RequestFilter};
use prompt_core::traits::{PromptRequestRepository, RepoResult};

use crate::models::PromptRequestModel;

use super::error::map_db_error;

macro_rules! request_columns {
    () => {
        r"id, requester_name, requester_email, requested_title, requested_language,
          requested_difficulty, requested_category, description, specific_requirements,
          use_case, preferred_topics, status, priority, assigned_to_id, assigned_by_id,
          assigned_at, completed_prompt_id, completed_at, admin_notes, response_message,
          is_urgent, is_rejected, estimated_hours, created_at, updated_at, deleted_at"
    };
}

macro_rules! request_filter {
    () => {
        r"
        WHERE deleted_at IS NULL
          AND ($1::TEXT IS NULL OR status = $1)
          AND ($2::TEXT IS NULL OR priority = $2)
          AND ($3::TEXT IS NULL OR requested_language = $3)
          AND ($4::TEXT IS NULL OR requested_difficulty = $4)
          AND ($5::TEXT IS NULL OR requested_category = $5)
          AND ($6::BOOLEAN IS NULL OR is_urgent = $6)
          AND ($7::BOOLEAN IS NULL OR is_rejected = $7)
          AND ($8::BIGINT IS NULL OR assigned_to_id = $8)
          AND ($9::TEXT IS NULL OR requester_email = $9)
          AND ($10::TEXT IS NULL
               OR requested_title ILIKE $10 ESCAPE '\'
               OR description ILIKE $10 ESCAPE '\')
        "
    };
}

/// PostgreSQL implementation of PromptRequestRepository
#[derive(Clone)]
pub struct PgPromptRequestRepository {
    pool: PgPool,
}

impl PgPromptRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRequestRepository for PgPromptRequestRepository {
    #[instrument(skip(self))]
    async fn find_all(
        &self,
        filter: &RequestFilter,
        page: PageRequest,
    ) -> RepoResult<Page<PromptRequest>> {
        let status = filter.status.map(|s| s.as_str());
        let priority = filter.priority.map(|p| p.as_str());
        let difficulty = filter.requested_difficulty.map(|d| d.as_str());
        let search = filter.search_pattern();

        let total = sqlx::query_scalar::<_, i64>(concat!(
            "SELECT COUNT(*) FROM prompt_requests ",
            request_filter!()
        ))
        .bind(status)
        .bind(priority)
        .bind(filter.requested_language.as_deref())
        .bind(difficulty)
        .bind(filter.requested_category.as_deref())
        .bind(filter.is_urgent)
        .bind(filter.is_rejected)
        .bind(filter.assigned_to_id)
        .bind(filter.requester_email.as_deref())
        .bind(search.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, PromptRequestModel>(concat!(
            "SELECT ",
            request_columns!(),
            " FROM prompt_requests ",
            request_filter!(),
            " ORDER BY created_at DESC, id DESC LIMIT $11 OFFSET $12"
        ))
        .bind(status)
        .bind(priority)
        .bind(filter.requested_language.as_deref())
        .bind(difficulty)
        .bind(filter.requested_category.as_deref())
        .bind(filter.is_urgent)
        .bind(filter.is_rejected)
        .bind(filter.assigned_to_id)
        .bind(filter.requester_email.as_deref())
        .bind(search.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(PromptRequest::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<PromptRequest>> {
        let result = sqlx::query_as::<_, PromptRequestModel>(concat!(
            "SELECT ",
            request_columns!(),
            " FROM prompt_requests WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PromptRequest::from))
    }

    #[instrument(skip(self, request), fields(email = %request.requester_email))]
    async fn create(&self, request: &NewPromptRequest) -> RepoResult<PromptRequest> {
        let request = request.clone().normalized();

        let row = sqlx::query_as::<_, PromptRequestModel>(concat!(
            r"
            INSERT INTO prompt_requests (
                requester_name, requester_email, requested_title, requested_language,
                requested_difficulty, requested_category, description, specific_requirements,
                use_case, preferred_topics, priority, is_urgent
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING ",
            request_columns!()
        ))
        .bind(&request.requester_name)
        .bind(&request.requester_email)
        .bind(&request.requested_title)
        .bind(&request.requested_language)
        .bind(request.requested_difficulty.as_str())
        .bind(&request.requested_category)
        .bind(&request.description)
        .bind(&request.specific_requirements)
        .bind(&request.use_case)
        .bind(&request.preferred_topics)
        .bind(request.priority.as_str())
        .bind(request.is_urgent)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(PromptRequest::from(row))
    }

    #[instrument(skip(self, request), fields(id = request.id, status = %request.status))]
    async fn update(&self, request: &PromptRequest) -> RepoResult<PromptRequest> {
        let row = sqlx::query_as::<_, PromptRequestModel>(concat!(
            r"
            UPDATE prompt_requests
            SET status = $2, priority = $3, assigned_to_id = $4, assigned_by_id = $5,
                assigned_at = $6, completed_prompt_id = $7, completed_at = $8,
                admin_notes = $9, response_message = $10, is_urgent = $11,
                is_rejected = $12, estimated_hours = $13, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING ",
            request_columns!()
        ))
        .bind(request.id)
        .bind(request.status.as_str())
        .bind(request.priority.as_str())
        .bind(request.assigned_to_id)
        .bind(request.assigned_by_id)
        .bind(request.assigned_at)
        .bind(request.completed_prompt_id)
        .bind(request.completed_at)
        .bind(&request.admin_notes)
        .bind(&request.response_message)
        .bind(request.is_urgent)
        .bind(request.is_rejected)
        .bind(request.estimated_hours)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(PromptRequest::from)
            .ok_or(DomainError::RequestNotFound(request.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE prompt_requests
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RequestNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM prompt_requests WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
