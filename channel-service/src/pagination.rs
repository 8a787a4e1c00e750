//! Page/limit/sort normalization shared by every listing.
//!
//! All paginated reads go through [`PageParams::from_request`] so that page
//! math and sort defaults behave identically for comments, tweets, videos and
//! subscription listings.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

/// Raw, caller-supplied paging input. Everything optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort field + direction as the store consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Normalized paging parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub limit: u32,
    pub sort: SortSpec,
}

impl PageParams {
    /// Normalize raw input: page and limit are floored at 1, the limit
    /// default comes from configuration and is clamped only when a cap is
    /// configured. Sort direction is descending unless the caller passed
    /// exactly "asc"-compatible input; the field defaults to `createdAt`.
    pub fn from_request(req: &PageRequest, cfg: &PaginationConfig) -> Self {
        let page = req.page.unwrap_or(DEFAULT_PAGE).max(1);
        let mut limit = req.limit.unwrap_or(cfg.default_limit).max(1);
        if let Some(cap) = cfg.max_limit {
            limit = limit.min(cap.max(1));
        }
        let direction = match req.sort_order.as_deref() {
            None | Some("desc") => SortDirection::Desc,
            Some(_) => SortDirection::Asc,
        };
        let field = req
            .sort_by
            .clone()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string());
        Self {
            page,
            limit,
            sort: SortSpec { field, direction },
        }
    }

    /// Number of documents to skip for this page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// `ceil(total_count / limit)`; zero matching documents means zero pages.
pub fn total_pages(total_count: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    total_count.div_ceil(limit) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PaginationConfig {
        PaginationConfig::default()
    }

    #[test]
    fn defaults_apply_when_input_is_empty() {
        let params = PageParams::from_request(&PageRequest::default(), &cfg());
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert_eq!(params.skip(), 0);
        assert_eq!(params.sort.field, "createdAt");
        assert_eq!(params.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn page_and_limit_are_floored_at_one() {
        let req = PageRequest {
            page: Some(0),
            limit: Some(0),
            ..Default::default()
        };
        let params = PageParams::from_request(&req, &cfg());
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
    }

    #[test]
    fn skip_is_page_minus_one_times_limit() {
        let req = PageRequest {
            page: Some(3),
            limit: Some(25),
            ..Default::default()
        };
        let params = PageParams::from_request(&req, &cfg());
        assert_eq!(params.skip(), 50);
    }

    #[test]
    fn non_desc_sort_order_means_ascending() {
        // Historical API behavior: anything other than "desc" sorts ascending.
        for order in ["asc", "ASC", "oldest"] {
            let req = PageRequest {
                sort_order: Some(order.to_string()),
                ..Default::default()
            };
            let params = PageParams::from_request(&req, &cfg());
            assert_eq!(params.sort.direction, SortDirection::Asc, "{order}");
        }
    }

    #[test]
    fn limit_is_uncapped_unless_configured() {
        let req = PageRequest {
            limit: Some(5000),
            ..Default::default()
        };
        assert_eq!(PageParams::from_request(&req, &cfg()).limit, 5000);

        let capped = PaginationConfig {
            max_limit: Some(100),
            ..Default::default()
        };
        assert_eq!(PageParams::from_request(&req, &capped).limit, 100);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(7, 5), 2);
    }
}
