//! List query extractor
//!
//! Query strings are decoded into a flat string map first and then
//! interpreted per endpoint. Pagination is lenient: a missing, non-numeric
//! or non-positive `page`/`limit` falls back to its default. Boolean flags
//! are strict and reject anything outside the accepted spellings.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use prompt_core::query::DEFAULT_LIMIT;
use prompt_service::{PromptListQuery, RequestListQuery, UserListQuery};

use crate::response::ApiError;

/// Default page number
const DEFAULT_PAGE: i64 = 1;

/// Parse a boolean the way query strings commonly spell it
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Raw query parameters
#[derive(Debug, Clone, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self(params)
    }

    /// Non-blank text value, exactly as supplied
    pub fn text(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }

    /// Strict boolean; an unrecognised value is rejected
    pub fn flag(&self, key: &str) -> Result<Option<bool>, ApiError> {
        self.text(key)
            .map(|v| {
                parse_bool(&v).ok_or_else(|| {
                    ApiError::invalid_query(format!("{key} must be a boolean, got {v:?}"))
                })
            })
            .transpose()
    }

    /// Strict positive id
    pub fn id(&self, key: &str) -> Result<Option<i64>, ApiError> {
        self.text(key)
            .map(|v| match v.parse::<i64>() {
                Ok(id) if id > 0 => Ok(id),
                _ => Err(ApiError::invalid_query(format!(
                    "{key} must be a positive integer, got {v:?}"
                ))),
            })
            .transpose()
    }

    /// Lenient positive integer with a default
    pub fn positive_or(&self, key: &str, default: i64) -> i64 {
        self.text(key)
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v >= 1)
            .unwrap_or(default)
    }

    pub fn page(&self) -> i64 {
        self.positive_or("page", DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i64 {
        self.positive_or("limit", DEFAULT_LIMIT)
    }
}

/// Types built from a query string
pub trait FromQueryParams: Sized {
    fn from_params(params: &QueryParams) -> Result<Self, ApiError>;
}

impl FromQueryParams for PromptListQuery {
    fn from_params(params: &QueryParams) -> Result<Self, ApiError> {
        Ok(Self {
            language: params.text("language"),
            difficulty: params.text("difficulty"),
            category: params.text("category"),
            search: params.text("search"),
            is_verified: params.flag("is_verified")?,
            page: params.page(),
            limit: params.limit(),
        })
    }
}

impl FromQueryParams for RequestListQuery {
    fn from_params(params: &QueryParams) -> Result<Self, ApiError> {
        Ok(Self {
            status: params.text("status"),
            priority: params.text("priority"),
            requested_language: params.text("requested_language"),
            requested_difficulty: params.text("requested_difficulty"),
            requested_category: params.text("requested_category"),
            is_urgent: params.flag("is_urgent")?,
            is_rejected: params.flag("is_rejected")?,
            assigned_to_id: params.id("assigned_to_id")?,
            requester_email: params.text("requester_email"),
            search: params.text("search"),
            page: params.page(),
            limit: params.limit(),
        })
    }
}

impl FromQueryParams for UserListQuery {
    fn from_params(params: &QueryParams) -> Result<Self, ApiError> {
        Ok(Self {
            role: params.text("role"),
            is_active: params.flag("is_active")?,
            search: params.text("search"),
            page: params.page(),
            limit: params.limit(),
        })
    }
}

/// Extract a list query from the query string
#[derive(Debug, Clone)]
pub struct ListQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    S: Send + Sync,
    T: FromQueryParams,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        T::from_params(&QueryParams::new(raw)).map(ListQuery)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(QueryParams::new(raw))
    }
}
