//! # prompt-core
//!
//! Domain layer containing entities, value objects, query filters and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewPrompt, NewPromptRequest, NewUser, Prompt, PromptRequest, User};
pub use error::{DomainError, ErrorKind};
pub use query::{Page, PageRequest, PromptFilter, RequestFilter, UserFilter};
pub use traits::{PromptRepository, PromptRequestRepository, RepoResult, UserRepository};
pub use value_objects::{
    Capabilities, Difficulty, ParseEnumError, Priority, RequestStatus, UserRole,
};
