//! Pagination types
//!
//! Defines the page request, the page result and the paginator bounds
//! shared by every listing endpoint.

/// Largest page size the provider accepts
pub const MAX_PER_PAGE: u32 = 200;

/// Default upper bound on page requests for a single listing
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Selects one page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl PageRequest {
    /// Request the first page with the given size
    pub fn first(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }

    /// Create a request for an arbitrary page
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Query parameters for this request
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(MAX_PER_PAGE)
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available; this request retrieves the next one
    Continue(PageRequest),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The request for the next page, if any
    pub fn request(&self) -> Option<PageRequest> {
        match self {
            Self::Continue(request) => Some(*request),
            Self::Done => None,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in provider order
    pub items: Vec<T>,
    /// Where to go from here
    pub next: NextPage,
}

impl<T> Page<T> {
    /// A page followed by another one
    pub fn more(items: Vec<T>, next: PageRequest) -> Self {
        Self {
            items,
            next: NextPage::Continue(next),
        }
    }

    /// The final page of a listing
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next: NextPage::Done,
        }
    }

    /// An empty final page
    pub fn empty() -> Self {
        Self::last(Vec::new())
    }
}

/// Configuration for pagination behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Items requested per page
    pub per_page: u32,
    /// Maximum number of page requests per listing
    pub max_pages: usize,
    /// Maximum number of accumulated items per listing
    pub max_items: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: MAX_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            max_items: None,
        }
    }
}

impl PaginationConfig {
    /// Create a config with the given page size, clamped to `1..=MAX_PER_PAGE`
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            ..Default::default()
        }
    }

    /// Set the page bound
    #[must_use]
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the item bound
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// The first request of every listing
    pub fn first_request(&self) -> PageRequest {
        PageRequest::first(self.per_page.clamp(1, MAX_PER_PAGE))
    }
}
