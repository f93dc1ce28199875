//! # prompt-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and the migration runner
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prompt_db::{create_pool, PgPromptRepository, PoolConfig};
//!
//! async fn example(url: String) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolConfig::new(url)).await?;
//!     let prompts = PgPromptRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{check_connection, create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgPromptRepository, PgPromptRequestRepository, PgUserRepository};
