//! Pagination

/// Default page size
pub const DEFAULT_LIMIT: i64 = 10;
/// Largest page size accepted for list endpoints
pub const MAX_LIMIT: i64 = 100;
/// Largest page size accepted for the popular prompts endpoint
pub const MAX_POPULAR_LIMIT: i64 = 50;

/// Normalised page selection: `page >= 1`, `1 <= limit <= 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Page below 1 becomes 1; a limit outside `[1, 100]` becomes 10
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: if (1..=MAX_LIMIT).contains(&limit) {
                limit
            } else {
                DEFAULT_LIMIT
            },
        }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.limit - 1) / self.limit
        }
    }

    /// Limit for the popular listing: outside `[1, 50]` becomes 10
    pub fn popular_limit(limit: i64) -> i64 {
        if (1..=MAX_POPULAR_LIMIT).contains(&limit) {
            limit
        } else {
            DEFAULT_LIMIT
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_LIMIT)
    }
}

/// One page of results plus the unpaginated match count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self { items, total }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}
