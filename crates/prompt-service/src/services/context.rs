//! Service context - dependency container for services
//!
//! Holds the repositories, the optional database pool and the view counter.

use std::sync::Arc;

use prompt_core::traits::{PromptRepository, PromptRequestRepository, UserRepository};
use prompt_db::{PgPool, PgPromptRepository, PgPromptRequestRepository, PgUserRepository};
use tracing::warn;

use super::error::{ServiceError, ServiceResult};
use super::view_counter::{ViewCounter, DEFAULT_QUEUE_CAPACITY};

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Present when backed by PostgreSQL
    pool: Option<PgPool>,

    // Repositories
    prompt_repo: Arc<dyn PromptRepository>,
    request_repo: Arc<dyn PromptRequestRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Background work
    view_counter: Arc<ViewCounter>,
}

impl ServiceContext {
    /// PostgreSQL-backed context. Must be called inside a tokio runtime.
    pub fn from_pool(pool: PgPool, view_counter_capacity: usize) -> Self {
        let prompt_repo: Arc<dyn PromptRepository> = Arc::new(PgPromptRepository::new(pool.clone()));
        let view_counter = Arc::new(ViewCounter::spawn(
            Arc::clone(&prompt_repo),
            view_counter_capacity,
        ));

        Self {
            request_repo: Arc::new(PgPromptRequestRepository::new(pool.clone())),
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            pool: Some(pool),
            prompt_repo,
            view_counter,
        }
    }

    /// Create a builder for ServiceContext
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Ping the database. Contexts without a pool report healthy.
    pub async fn check_database(&self) -> bool {
        let Some(pool) = &self.pool else {
            return true;
        };
        match prompt_db::check_connection(pool).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        }
    }

    // === Repositories ===

    /// Get the prompt repository
    pub fn prompt_repo(&self) -> &dyn PromptRepository {
        self.prompt_repo.as_ref()
    }

    /// Get the prompt request repository
    pub fn request_repo(&self) -> &dyn PromptRequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Background work ===

    pub fn view_counter(&self) -> &ViewCounter {
        &self.view_counter
    }

    /// Drain the view counter and close the pool
    pub async fn shutdown(&self) {
        self.view_counter.shutdown().await;
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.is_some())
            .field("view_counter", &self.view_counter)
            .finish_non_exhaustive()
    }
}

/// Builder for ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    prompt_repo: Option<Arc<dyn PromptRepository>>,
    request_repo: Option<Arc<dyn PromptRequestRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    view_counter_capacity: Option<usize>,
}

impl ServiceContextBuilder {
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn prompt_repo(mut self, repo: Arc<dyn PromptRepository>) -> Self {
        self.prompt_repo = Some(repo);
        self
    }

    pub fn request_repo(mut self, repo: Arc<dyn PromptRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn view_counter_capacity(mut self, capacity: usize) -> Self {
        self.view_counter_capacity = Some(capacity);
        self
    }

    /// Build the context and start its view counter.
    ///
    /// Must be called inside a tokio runtime.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let prompt_repo = self
            .prompt_repo
            .ok_or_else(|| ServiceError::validation("prompt_repo is required"))?;
        let request_repo = self
            .request_repo
            .ok_or_else(|| ServiceError::validation("request_repo is required"))?;
        let user_repo = self
            .user_repo
            .ok_or_else(|| ServiceError::validation("user_repo is required"))?;

        let view_counter = Arc::new(ViewCounter::spawn(
            Arc::clone(&prompt_repo),
            self.view_counter_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY),
        ));

        Ok(ServiceContext {
            pool: self.pool,
            prompt_repo,
            request_repo,
            user_repo,
            view_counter,
        })
    }
}
