//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod prompts;
pub mod requests;
pub mod users;

use crate::response::ApiError;

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
