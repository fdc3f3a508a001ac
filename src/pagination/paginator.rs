//! Drives a page fetcher to exhaustion

use super::fetcher::PageFetcher;
use super::types::{NextPage, PaginationConfig};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Collects every page of a listing into one ordered `Vec`.
///
/// Pages are fetched strictly one after another: the next request is taken
/// from the previous response's metadata, so page N+1 is never requested
/// before page N has answered. The paginator holds only configuration and
/// can be shared freely between tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Create a paginator with the given bounds
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Fetch all pages and return their items in page-then-within-page order.
    ///
    /// All-or-nothing: the first fetch error is returned and anything
    /// accumulated so far is dropped. Exceeding `max_pages` or `max_items`
    /// and metadata that points back at an already fetched page are errors
    /// as well.
    pub async fn collect<T, F>(&self, fetcher: &F) -> Result<Vec<T>>
    where
        F: PageFetcher<T> + ?Sized,
    {
        let max_pages = self.config.max_pages.max(1);
        let mut request = self.config.first_request();
        let mut requested = HashSet::new();
        let mut items = Vec::new();

        loop {
            requested.insert(request);
            let page = fetcher.fetch_page(request).await?;
            debug!(
                page = request.page,
                per_page = request.per_page,
                count = page.items.len(),
                "Fetched page"
            );

            items.extend(page.items);

            if let Some(max_items) = self.config.max_items {
                if items.len() > max_items {
                    return Err(Error::too_many_items(max_items));
                }
            }

            match page.next {
                NextPage::Done => {
                    debug!(pages = requested.len(), total = items.len(), "Pagination complete");
                    return Ok(items);
                }
                NextPage::Continue(next) => {
                    if requested.len() >= max_pages {
                        return Err(Error::too_many_pages(max_pages));
                    }
                    if requested.contains(&next) {
                        return Err(Error::PaginationCycle { page: next.page });
                    }
                    request = next;
                }
            }
        }
    }
}
