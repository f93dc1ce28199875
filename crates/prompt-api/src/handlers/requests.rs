//! Prompt request handlers
//!
//! Public submission plus the administrative workflow endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use prompt_service::{
    ApiResponse, PaginatedResponse, PromptRequestResponse, PromptRequestService, RequestListQuery,
    SubmitPromptRequest, TriagePromptRequest,
};

use crate::extractors::{parse_id, JsonBody, ListQuery};
use crate::response::{success, success_message, ApiResult, Created};
use crate::state::AppState;

const INVALID_REQUEST_ID: &str = "Invalid request ID";

/// GET /requests
pub async fn list_requests(
    State(state): State<AppState>,
    ListQuery(query): ListQuery<RequestListQuery>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<PromptRequestResponse>>>> {
    let service = PromptRequestService::new(state.service_context());
    let result = service.list_requests(query).await?;
    Ok(success("Requests fetched successfully", result))
}

/// POST /requests
pub async fn submit_request(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SubmitPromptRequest>,
) -> ApiResult<Created<Json<ApiResponse<PromptRequestResponse>>>> {
    let service = PromptRequestService::new(state.service_context());
    let stored = service.submit_request(request).await?;
    Ok(Created(success("Request submitted successfully", stored)))
}

/// GET /requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<PromptRequestResponse>>> {
    let id = parse_id(&id, INVALID_REQUEST_ID)?;
    let service = PromptRequestService::new(state.service_context());
    let request = service.get_request(id).await?;
    Ok(success("Request fetched successfully", request))
}

/// PATCH /requests/{id}
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<TriagePromptRequest>,
) -> ApiResult<Json<ApiResponse<PromptRequestResponse>>> {
    let id = parse_id(&id, INVALID_REQUEST_ID)?;
    let service = PromptRequestService::new(state.service_context());
    let request = service.update_request(id, update).await?;
    Ok(success("Request updated successfully", request))
}

/// DELETE /requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id, INVALID_REQUEST_ID)?;
    let service = PromptRequestService::new(state.service_context());
    service.delete_request(id).await?;
    Ok(success_message("Request deleted successfully"))
}
