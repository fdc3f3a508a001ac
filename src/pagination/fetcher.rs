//! The page fetcher contract
//!
//! A fetcher knows how to ask one endpoint for one page. The paginator
//! knows how to walk pages. Neither knows about the other's details.

use super::types::{Page, PageRequest};
use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;

/// Fetches a single page of `T`.
///
/// Each call must issue exactly one request to the provider. On error the
/// paginator discards the call entirely.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch the page selected by `request`
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<T>>;
}

/// Any `Fn(PageRequest) -> impl Future<Output = Result<Page<T>>>` is a fetcher.
///
/// The returned future must own its data; fetchers that borrow should be
/// written as a type implementing [`PageFetcher`] directly.
#[async_trait]
impl<T, F, Fut> PageFetcher<T> for F
where
    T: Send + 'static,
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
{
    async fn fetch_page(&self, request: PageRequest) -> Result<Page<T>> {
        (self)(request).await
    }
}
