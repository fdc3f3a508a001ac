//! Pagination module
//!
//! Turns a series of page-by-page provider calls into one fully
//! materialized, order-preserving collection.
//!
//! # Overview
//!
//! - [`PageFetcher`] asks one endpoint for one page.
//! - [`Paginator`] walks pages until the provider reports none left.
//! - [`Links`] reads the provider's pagination metadata, which has the same
//!   shape for every resource type.

mod fetcher;
mod links;
mod paginator;
mod types;

pub use fetcher::PageFetcher;
pub use links::{next_page_from, LinkAction, Links, Meta, PageLinks};
pub use paginator::Paginator;
pub use types::{
    NextPage, Page, PageRequest, PaginationConfig, DEFAULT_MAX_PAGES, MAX_PER_PAGE,
};

#[cfg(test)]
mod tests;
