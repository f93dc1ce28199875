//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use prompt_core::entities::{NewPrompt, Prompt};
use prompt_core::error::DomainError;
use prompt_core::query::{Page, PageRequest, PromptFilter};
use prompt_core::traits::{PromptRepository, RepoResult};

use crate::mappers::encode_string_list;
use crate::models::PromptModel;

use super::error::map_db_error;

macro_rules! prompt_columns {
    () => {
        r"id, title, description, language, difficulty, category, problem_statement,
          is_verified, verified_by, verified_at, view_count, like_count, difficulty_vote,
          tags, author_id, author_name, author_email, created_at, updated_at, deleted_at"
    };
}

/// Filter predicate shared by the count and page queries.
/// $1 language, $2 difficulty, $3 category, $4 is_verified, $5 search pattern
macro_rules! prompt_filter {
    () => {
        r"
        WHERE deleted_at IS NULL
          AND ($1::TEXT IS NULL OR language = $1)
          AND ($2::TEXT IS NULL OR difficulty = $2)
          AND ($3::TEXT IS NULL OR category = $3)
          AND ($4::BOOLEAN IS NULL OR is_verified = $4)
          AND ($5::TEXT IS NULL
               OR title ILIKE $5 ESCAPE '\'
               OR description ILIKE $5 ESCAPE '\'
               OR problem_statement ILIKE $5 ESCAPE '\')
        "
    };
}

/// PostgreSQL implementation of PromptRepository
#[derive(Clone)]
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    /// Create a new PgPromptRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &PromptFilter, page: PageRequest) -> RepoResult<Page<Prompt>> {
        let search = filter.search_pattern();
        let difficulty = filter.difficulty.map(|d| d.as_str());

        let total = sqlx::query_scalar::<_, i64>(concat!(
            "SELECT COUNT(*) FROM prompts ",
            prompt_filter!()
        ))
        .bind(filter.language.as_deref())
        .bind(difficulty)
        .bind(filter.category.as_deref())
        .bind(filter.is_verified)
        .bind(search.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, PromptModel>(concat!(
            "SELECT ",
            prompt_columns!(),
            " FROM prompts ",
            prompt_filter!(),
            " ORDER BY created_at DESC, id DESC LIMIT $6 OFFSET $7"
        ))
        .bind(filter.language.as_deref())
        .bind(difficulty)
        .bind(filter.category.as_deref())
        .bind(filter.is_verified)
        .bind(search.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(Prompt::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Prompt>> {
        let result = sqlx::query_as::<_, PromptModel>(concat!(
            "SELECT ",
            prompt_columns!(),
            " FROM prompts WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Prompt::from))
    }

    #[instrument(skip(self))]
    async fn find_popular(&self, limit: i64) -> RepoResult<Vec<Prompt>> {
        let rows = sqlx::query_as::<_, PromptModel>(concat!(
            "SELECT ",
            prompt_columns!(),
            " FROM prompts WHERE deleted_at IS NULL ORDER BY view_count DESC, id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Prompt::from).collect())
    }

    #[instrument(skip(self, prompt), fields(title = %prompt.title))]
    async fn create(&self, prompt: &NewPrompt) -> RepoResult<Prompt> {
        let tags = encode_string_list(&prompt.tags)?;

        let row = sqlx::query_as::<_, PromptModel>(concat!(
            r"
            INSERT INTO prompts (title, description, language, difficulty, category,
                                 problem_statement, tags, author_id, author_name, author_email)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING ",
            prompt_columns!()
        ))
        .bind(&prompt.title)
        .bind(&prompt.description)
        .bind(&prompt.language)
        .bind(prompt.difficulty.as_str())
        .bind(&prompt.category)
        .bind(&prompt.problem_statement)
        .bind(tags)
        .bind(prompt.author_id)
        .bind(&prompt.author_name)
        .bind(&prompt.author_email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Prompt::from(row))
    }

    #[instrument(skip(self, prompt), fields(id = prompt.id))]
    async fn update(&self, prompt: &Prompt) -> RepoResult<Prompt> {
        let tags = encode_string_list(&prompt.tags)?;

        let row = sqlx::query_as::<_, PromptModel>(concat!(
            r"
            UPDATE prompts
            SET title = $2, description = $3, language = $4, difficulty = $5, category = $6,
                problem_statement = $7, is_verified = $8, verified_by = $9, verified_at = $10,
                tags = $11, author_name = $12, author_email = $13, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING ",
            prompt_columns!()
        ))
        .bind(prompt.id)
        .bind(&prompt.title)
        .bind(&prompt.description)
        .bind(&prompt.language)
        .bind(prompt.difficulty.as_str())
        .bind(&prompt.category)
        .bind(&prompt.problem_statement)
        .bind(prompt.is_verified)
        .bind(prompt.verified_by)
        .bind(prompt.verified_at)
        .bind(tags)
        .bind(&prompt.author_name)
        .bind(&prompt.author_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Prompt::from)
            .ok_or(DomainError::PromptNotFound(prompt.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE prompts
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PromptNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM prompts WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn increment_view_count(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE prompts SET view_count = view_count + 1 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PromptNotFound(id));
        }

        Ok(())
    }
}
