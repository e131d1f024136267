//! Pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// One page of a listing, with enough position info to fetch the next.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total matching items across all pages, when the server reports it.
    pub total: Option<u64>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Whether another page exists.
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pagination params for the page after this one, if any.
    pub fn next(&self) -> Option<PaginationParams> {
        if !self.has_more {
            return None;
        }
        Some(PaginationParams::for_page(self.page + 1, self.page_size))
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Position parameters for a paginated request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    #[must_use]
    pub fn for_page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Wire shape of a paginated response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageEnvelope<T> {
    items: Vec<T>,
    #[serde(default)]
    total: Option<u64>,
    page: u32,
    page_size: u32,
}

impl<T> PageEnvelope<T> {
    pub(crate) fn into_page(self) -> Page<T> {
        // Servers that cannot count report no total; a full page then
        // implies more may follow.
        let has_more = match self.total {
            Some(total) => u64::from(self.page) * u64::from(self.page_size) < total,
            None => self.items.len() >= self.page_size as usize,
        };
        Page {
            items: self.items,
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            has_more,
        }
    }
}
