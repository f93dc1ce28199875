//! Business logic services
//!
//! Services validate input, apply defaults and delegate to the repositories
//! held by [`ServiceContext`].

pub mod context;
pub mod error;
pub mod prompt;
pub mod prompt_request;
pub mod user;
pub mod view_counter;

mod validation;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use prompt::PromptService;
pub use prompt_request::PromptRequestService;
pub use user::UserService;
pub use view_counter::{ViewCounter, ViewCounterStats};
