//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use prompt_core::entities::{NewUser, User};
use prompt_core::error::DomainError;
use prompt_core::query::{Page, PageRequest, UserFilter};
use prompt_core::traits::{RepoResult, UserRepository};

use crate::mappers::encode_string_list;
use crate::models::UserModel;

use super::error::{map_db_error, map_user_unique_violation};

macro_rules! user_columns {
    () => {
        r"id, name, email, username, password_hash, role, is_active, bio, website, avatar,
          location, specialties, github_username, twitter_username, linkedin_profile,
          prompts_created, prompts_verified, requests_handled, created_at, updated_at, deleted_at"
    };
}

macro_rules! user_filter {
    () => {
        r"
        WHERE deleted_at IS NULL
          AND ($1::TEXT IS NULL OR role = $1)
          AND ($2::BOOLEAN IS NULL OR is_active = $2)
          AND ($3::TEXT IS NULL
               OR name ILIKE $3 ESCAPE '\'
               OR username ILIKE $3 ESCAPE '\'
               OR email ILIKE $3 ESCAPE '\')
        "
    };
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &UserFilter, page: PageRequest) -> RepoResult<Page<User>> {
        let role = filter.role.map(|r| r.as_str());
        let search = filter.search_pattern();

        let total = sqlx::query_scalar::<_, i64>(concat!(
            "SELECT COUNT(*) FROM users ",
            user_filter!()
        ))
        .bind(role)
        .bind(filter.is_active)
        .bind(search.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, UserModel>(concat!(
            "SELECT ",
            user_columns!(),
            " FROM users ",
            user_filter!(),
            " ORDER BY created_at DESC, id DESC LIMIT $4 OFFSET $5"
        ))
        .bind(role)
        .bind(filter.is_active)
        .bind(search.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(User::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(concat!(
            "SELECT ",
            user_columns!(),
            " FROM users WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND deleted_at IS NULL)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND deleted_at IS NULL)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let specialties = encode_string_list(&user.specialties)?;

        let row = sqlx::query_as::<_, UserModel>(concat!(
            r"
            INSERT INTO users (name, email, username, password_hash, role, bio, website, avatar,
                               location, specialties, github_username, twitter_username,
                               linkedin_profile)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING ",
            user_columns!()
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(password_hash)
        .bind(user.role.as_str())
        .bind(&user.bio)
        .bind(&user.website)
        .bind(&user.avatar)
        .bind(&user.location)
        .bind(specialties)
        .bind(&user.github_username)
        .bind(&user.twitter_username)
        .bind(&user.linkedin_profile)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        Ok(User::from(row))
    }

    #[instrument(skip(self, user), fields(id = user.id))]
    async fn update(&self, user: &User) -> RepoResult<User> {
        let specialties = encode_string_list(&user.specialties)?;

        let row = sqlx::query_as::<_, UserModel>(concat!(
            r"
            UPDATE users
            SET name = $2, email = $3, username = $4, role = $5, is_active = $6, bio = $7,
                website = $8, avatar = $9, location = $10, specialties = $11,
                github_username = $12, twitter_username = $13, linkedin_profile = $14,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING ",
            user_columns!()
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(&user.bio)
        .bind(&user.website)
        .bind(&user.avatar)
        .bind(&user.location)
        .bind(specialties)
        .bind(&user.github_username)
        .bind(&user.twitter_username)
        .bind(&user.linkedin_profile)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        row.map(User::from).ok_or(DomainError::UserNotFound(user.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_prompts_verified(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET prompts_verified = prompts_verified + 1, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }
}
