//! Domain entities - core business objects

mod prompt;
mod prompt_request;
mod user;

pub use prompt::{NewPrompt, Prompt};
pub use prompt_request::{NewPromptRequest, PromptRequest};
pub use user::{NewUser, User};
