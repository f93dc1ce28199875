//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{health, prompts, requests, route_not_found, users};
use crate::state::AppState;

/// Create the API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .method_not_allowed_fallback(route_not_found)
}

/// Handler for anything no route matched.
///
/// Route groups register the same handler for unsupported methods on known paths.
pub fn fallback(router: Router<AppState>) -> Router<AppState> {
    router.fallback(route_not_found)
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(prompt_routes())
        .merge(request_routes())
        .merge(user_routes())
        .method_not_allowed_fallback(route_not_found)
}

/// Prompt routes
fn prompt_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/prompts",
            get(prompts::list_prompts).post(prompts::create_prompt),
        )
        .route("/prompts/popular", get(prompts::popular_prompts))
        .route(
            "/prompts/:id",
            get(prompts::get_prompt)
                .patch(prompts::update_prompt)
                .delete(prompts::delete_prompt),
        )
        .route("/prompts/:id/verify", post(prompts::verify_prompt))
}

/// Prompt request routes
fn request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            get(requests::list_requests).post(requests::submit_request),
        )
        .route(
            "/requests/:id",
            get(requests::get_request)
                .patch(requests::update_request)
                .delete(requests::delete_request),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/admin", patch(users::admin_update_user))
}
