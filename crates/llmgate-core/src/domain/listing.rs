//! Search and pagination over registry listings.
//!
//! Listing order is always the registry's insertion order. Filtering and
//! paging are presentation helpers only; validation never goes through them.

use serde::Deserialize;

/// Page size used when a page is requested without an explicit size.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Query parameters for listing a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring filter. Blank means no filter.
    #[serde(default)]
    pub search: Option<String>,
    /// 1-based page number. When absent, every match is returned on one page.
    #[serde(default)]
    pub page: Option<usize>,
    /// Items per page. Zero or absent falls back to [`DEFAULT_PAGE_SIZE`].
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Number of items that matched the filter, across all pages.
    pub total: usize,
    pub total_pages: usize,
}

impl ListQuery {
    /// Lowercased, trimmed search term, or `None` when blank.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Filter `items` with `matches` and cut out the requested page.
    ///
    /// The page number is clamped into `1..=total_pages`, and `total_pages`
    /// is never less than one, so an empty result is still "page 1 of 1".
    pub fn apply<T>(&self, items: Vec<T>, matches: impl Fn(&T, &str) -> bool) -> Page<T> {
        let filtered: Vec<T> = match self.needle() {
            Some(needle) => items.into_iter().filter(|item| matches(item, &needle)).collect(),
            None => items,
        };
        let total = filtered.len();

        let Some(requested) = self.page else {
            return Page {
                page: 1,
                page_size: total.max(1),
                total,
                total_pages: 1,
                items: filtered,
            };
        };

        let page_size = match self.page_size {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(size) => size,
        };
        let total_pages = total.div_ceil(page_size).max(1);
        let page = requested.clamp(1, total_pages);
        let items = filtered
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Page {
            items,
            page,
            page_size,
            total,
            total_pages,
        }
    }
}
