//! Page/limit arithmetic and the paged result envelope

use serde::Serialize;

/// Largest page size accepted at the transport boundary
pub const MAX_LIMIT: u64 = 100;

/// A 1-based page request. Bounds (`page >= 1`, `1 <= limit <= 100`) are
/// checked by the caller before reaching the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Documents to skip before the window starts
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` documents (0 when there are none)
    pub fn total_pages(&self, total: u64) -> u64 {
        if total == 0 || self.limit == 0 {
            0
        } else {
            total.div_ceil(self.limit)
        }
    }

    /// Wrap a fetched window with its metadata
    pub fn into_page<T>(self, data: Vec<T>, total: u64) -> Page<T> {
        Page {
            data,
            total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages(total),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// A window of records plus paging metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Documents matching the filter, independent of the window
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}
