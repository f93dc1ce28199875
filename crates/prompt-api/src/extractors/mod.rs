//! Axum extractors for request handling
//!
//! Custom extractors for JSON bodies, list queries and path ids.

mod json;
mod path;
mod query;

pub use json::JsonBody;
pub use path::parse_id;
pub use query::{parse_bool, FromQueryParams, ListQuery, QueryParams};
