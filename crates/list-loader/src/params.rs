//! Pagination Parameters
//!
//! The `{ <resource>_count, <resource>_per_page }` payload served by every
//! paginated resource, and the page arithmetic derived from it.

use serde_json::Value;

use crate::error::{LoadError, LoadResult};

/// Totals reported by the parameters endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub total_count: u32,
    pub per_page: u32,
}

impl PaginationParams {
    pub fn new(total_count: u32, per_page: u32) -> LoadResult<Self> {
        if per_page == 0 {
            return Err(LoadError::MalformedResponse("page size must be positive".to_string()));
        }
        Ok(Self { total_count, per_page })
    }

    /// Parse the parameters payload for a resource whose keys are prefixed
    /// with `prefix` (e.g. `posts` -> `posts_count`, `posts_per_page`).
    pub fn from_json(value: &Value, prefix: &str) -> LoadResult<Self> {
        let total_count = read_count(value, &format!("{}_count", prefix))?;
        let per_page = read_count(value, &format!("{}_per_page", prefix))?;
        Self::new(total_count, per_page)
    }

    pub fn from_body(body: &str, prefix: &str) -> LoadResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| LoadError::MalformedResponse(format!("invalid JSON: {}", e)))?;
        Self::from_json(&value, prefix)
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total_count, self.per_page)
    }
}

/// `ceil(total / per_page)`; zero when `per_page` is zero.
pub fn page_count(total_count: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_count.div_ceil(per_page)
}

fn read_count(value: &Value, key: &str) -> LoadResult<u32> {
    let raw = value
        .get(key)
        .ok_or_else(|| LoadError::MalformedResponse(format!("missing key `{}`", key)))?;
    // JS numbers may come through as whole floats
    raw.as_u64()
        .or_else(|| raw.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| LoadError::MalformedResponse(format!("`{}` is not a count: {}", key, raw)))
}
