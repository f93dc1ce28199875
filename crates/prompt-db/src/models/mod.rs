//! Database models - SQLx-compatible structs for PostgreSQL tables

mod prompt;
mod prompt_request;
mod user;

pub use prompt::PromptModel;
pub use prompt_request::PromptRequestModel;
pub use user::UserModel;
