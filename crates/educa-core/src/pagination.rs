//! Pagination utilities for list endpoints.
//!
//! List endpoints accept `page`, `limit` and `order` query parameters and
//! answer with a `data` array plus a `pagination` block:
//!
//! ```json
//! {
//!   "data": [...],
//!   "pagination": { "page": 2, "limit": 10, "totalItems": 35, "totalPages": 4 }
//! }
//! ```
//!
//! - `page` is 1-indexed and clamped to a minimum of 1 (default 1)
//! - `limit` is clamped to [1, 100] (default 10)
//! - `order` sorts by creation time, `asc` or `desc` (default `desc`)
//!
//! Empty or unparseable values fall back to the defaults.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Deserializes an optional string into an optional i64.
///
/// Query parameters arrive as strings; empty or non-numeric values are
/// treated as absent.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<i64>().ok()))
}

fn deserialize_sort_order<'de, D>(deserializer: D) -> Result<SortOrder, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| SortOrder::parse(&s)).unwrap_or_default())
}

/// Sort direction on `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` (case-insensitive) sorts descending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query parameters for paginated list endpoints.
#[derive(Debug, Clone, Hash, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[param(value_type = Option<i64>, minimum = 1)]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    #[param(value_type = Option<i64>, minimum = 1, maximum = 100)]
    pub limit: Option<i64>,
    /// Sort direction by creation date (default: desc)
    #[serde(default, deserialize_with = "deserialize_sort_order")]
    #[param(value_type = Option<SortOrder>)]
    pub order: SortOrder,
}

impl PaginationParams {
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number
    pub page: i64,
    /// Items per page
    pub limit: i64,
    /// Total number of items across all pages
    pub total_items: i64,
    /// Total number of pages
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total_items: i64) -> Self {
        let limit = params.limit();
        Self {
            page: params.page(),
            limit,
            total_items,
            total_pages: total_pages(total_items, limit),
        }
    }
}

/// `ceil(total_items / limit)`, zero when there is nothing to page through.
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items <= 0 || limit <= 0 {
        return 0;
    }
    (total_items + limit - 1) / limit
}
