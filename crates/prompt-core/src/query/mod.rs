//! Query value objects - pagination and list filters
//!
//! Each filter carries only the predicates a caller supplied. Empty strings are
//! treated as absent. `matches` evaluates the same conjunction in memory that the
//! SQL repositories evaluate in the database.

mod filters;
mod page;

pub use filters::{PromptFilter, RequestFilter, UserFilter};
pub use page::{Page, PageRequest, DEFAULT_LIMIT, MAX_LIMIT, MAX_POPULAR_LIMIT};

/// Treat blank strings as "not supplied". Supplied values are kept verbatim.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Build an ILIKE pattern matching `term` literally as a substring.
///
/// `%`, `_` and the escape character itself are escaped with `\`.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
