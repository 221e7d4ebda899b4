//! Pagination primitives
//!
//! Pages are 1-based. Page number and size are validated up front and never
//! silently clamped; a page past the last one is not an error and yields an
//! empty `content` with correct totals.

use serde::Serialize;

use crate::{Error, Result};

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_SIZE: i64 = 10;

    /// Validate and build a page request.
    ///
    /// # Errors
    /// `InvalidPage` when `page < 1`, `InvalidPageSize` when `size < 1`.
    pub fn new(page: i64, size: i64) -> Result<Self> {
        if page < 1 {
            return Err(Error::InvalidPage(page));
        }
        if size < 1 {
            return Err(Error::InvalidPageSize(size));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows skipped before this page's window.
    pub fn offset(&self) -> i64 {
        self.size * (self.page - 1)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_elements: i64,
}

impl<T> Page<T> {
    /// Wrap a fetched window and a pre-pagination total into a page.
    pub fn from_parts(content: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + request.size() - 1) / request.size()
        };

        Self {
            content,
            page: request.page(),
            page_size: request.size(),
            total_pages,
            total_elements,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
        }
    }
}
