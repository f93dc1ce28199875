//! User handlers
//!
//! Endpoints for the user directory and administrative changes.

use axum::{
    extract::{Path, State},
    Json,
};
use prompt_service::{
    AdminUpdateUserRequest, ApiResponse, CreateUserRequest, PaginatedResponse, UpdateUserRequest,
    UserListQuery, UserResponse, UserService,
};

use crate::extractors::{parse_id, JsonBody, ListQuery};
use crate::response::{success, success_message, ApiResult, Created};
use crate::state::AppState;

const INVALID_USER_ID: &str = "Invalid user ID";

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<UserListQuery>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<UserResponse>>>> {
    let service = UserService::new(state.service_context());
    let result = service.list_users(query).await?;
    Ok(success("Users fetched successfully", result))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> ApiResult<Created<Json<ApiResponse<UserResponse>>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Created(success("User created successfully", user)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let id = parse_id(&id, INVALID_USER_ID)?;
    let service = UserService::new(state.service_context());
    let user = service.get_user(id).await?;
    Ok(success("User fetched successfully", user))
}

/// PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let id = parse_id(&id, INVALID_USER_ID)?;
    let service = UserService::new(state.service_context());
    let user = service.update_user(id, update).await?;
    Ok(success("User updated successfully", user))
}

/// PATCH /users/{id}/admin
pub async fn admin_update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<AdminUpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let id = parse_id(&id, INVALID_USER_ID)?;
    let service = UserService::new(state.service_context());
    let user = service.admin_update_user(id, update).await?;
    Ok(success("User updated successfully", user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id, INVALID_USER_ID)?;
    let service = UserService::new(state.service_context());
    service.delete_user(id).await?;
    Ok(success_message("User deleted successfully"))
}
