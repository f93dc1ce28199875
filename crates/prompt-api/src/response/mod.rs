//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as the error envelope
//! `{status: "error", message, error}`; the status code comes from the
//! error's [`ErrorKind`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prompt_common::AppError;
use prompt_core::ErrorKind;
use prompt_service::{ApiResponse, ServiceError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message sent to clients in place of internal error details
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    App(#[from] AppError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Carries the client-facing message, e.g. "Invalid prompt ID"
    #[error("{0}")]
    InvalidId(&'static str),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Service(e) => e.kind(),
            Self::App(e) => e.kind(),
            Self::InvalidBody(_) | Self::InvalidQuery(_) | Self::InvalidId(_) => {
                ErrorKind::Validation
            }
            Self::RouteNotFound => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Machine readable code for the envelope's `error` field
    #[must_use]
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Service(e) => Some(e.error_code()),
            Self::App(e) => Some(e.error_code()),
            Self::InvalidBody(_) => Some("INVALID_BODY"),
            Self::InvalidQuery(_) => Some("INVALID_QUERY"),
            Self::InvalidId(_) => Some("INVALID_ID"),
            Self::RouteNotFound => None,
            Self::Internal(_) => Some("INTERNAL_ERROR"),
        }
    }

    /// Client-facing message; internal details never leave the server
    pub fn client_message(&self) -> String {
        if self.kind() == ErrorKind::Internal {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let body = ApiResponse::<()> {
            status: "error",
            message: Some(self.client_message()),
            data: None,
            error: self.error_code().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Success envelope with a payload
pub fn success<T: Serialize>(message: &str, data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(message, data))
}

/// Success envelope without a payload
pub fn success_message(message: &str) -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(message))
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
