//! Repository traits

mod repositories;

pub use repositories::{PromptRepository, PromptRequestRepository, RepoResult, UserRepository};
