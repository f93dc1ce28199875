//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in prompt-core.
//! Filters are bound as nullable parameters (`$n::TYPE IS NULL OR column = $n`)
//! so each query is a single static statement.

mod error;
mod prompt;
mod prompt_request;
mod user;

pub use prompt::PgPromptRepository;
pub use prompt_request::PgPromptRequestRepository;
pub use user::PgUserRepository;
