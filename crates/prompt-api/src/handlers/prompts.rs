//! Prompt handlers
//!
//! Endpoints for browsing, authoring and verifying prompts.

use axum::{
    extract::{Path, State},
    Json,
};
use prompt_service::{
    ApiResponse, CreatePromptRequest, PaginatedResponse, PromptListQuery, PromptResponse,
    PromptService, UpdatePromptRequest, VerifyPromptRequest,
};

use crate::extractors::{parse_id, JsonBody, ListQuery, QueryParams};
use crate::response::{success, success_message, ApiResult, Created};
use crate::state::AppState;

const INVALID_PROMPT_ID: &str = "Invalid prompt ID";

/// List prompts
///
/// GET /prompts?language&difficulty&category&search&is_verified&page&limit
pub async fn list_prompts(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<PromptListQuery>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<PromptResponse>>>> {
    let service = PromptService::new(state.service_context());
    let result = service.list_prompts(query).await?;
    Ok(success("Prompts fetched successfully", result))
}

/// Most viewed prompts
///
/// GET /prompts/popular?limit
pub async fn popular_prompts(
    State(state): State<AppState>,
    params: QueryParams,
) -> ApiResult<Json<ApiResponse<Vec<PromptResponse>>>> {
    let service = PromptService::new(state.service_context());
    let prompts = service.popular_prompts(params.limit()).await?;
    Ok(success("Popular prompts fetched successfully", prompts))
}

/// Get a prompt; queues a view-count increment
///
/// GET /prompts/{id}
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<PromptResponse>>> {
    let id = parse_id(&id, INVALID_PROMPT_ID)?;
    let service = PromptService::new(state.service_context());
    let prompt = service.get_prompt(id).await?;
    Ok(success("Prompt fetched successfully", prompt))
}

/// Create a prompt
///
/// POST /prompts
pub async fn create_prompt(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePromptRequest>,
) -> ApiResult<Created<Json<ApiResponse<PromptResponse>>>> {
    let service = PromptService::new(state.service_context());
    let prompt = service.create_prompt(request).await?;
    Ok(Created(success("Prompt created successfully", prompt)))
}

/// Update a prompt
///
/// PATCH /prompts/{id}
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdatePromptRequest>,
) -> ApiResult<Json<ApiResponse<PromptResponse>>> {
    let id = parse_id(&id, INVALID_PROMPT_ID)?;
    let service = PromptService::new(state.service_context());
    let prompt = service.update_prompt(id, request).await?;
    Ok(success("Prompt updated successfully", prompt))
}

/// Mark a prompt verified
///
/// POST /prompts/{id}/verify
pub async fn verify_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<VerifyPromptRequest>,
) -> ApiResult<Json<ApiResponse<PromptResponse>>> {
    let id = parse_id(&id, INVALID_PROMPT_ID)?;
    let service = PromptService::new(state.service_context());
    let prompt = service.verify_prompt(id, request).await?;
    Ok(success("Prompt verified successfully", prompt))
}

/// Delete a prompt
///
/// DELETE /prompts/{id}
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id, INVALID_PROMPT_ID)?;
    let service = PromptService::new(state.service_context());
    service.delete_prompt(id).await?;
    Ok(success_message("Prompt deleted successfully"))
}
