//! Tests for pagination module

use super::*;
use crate::error::{BoundUnit, Error, Result};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::future::{ready, Ready};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use test_case::test_case;

/// Serves `pages[n - 1]` for page `n`, advertising a successor until the last one.
fn scripted<T: Clone + Send + Sync + 'static>(
    pages: Vec<Vec<T>>,
) -> (
    impl Fn(PageRequest) -> Ready<Result<Page<T>>> + Send + Sync,
    Arc<AtomicUsize>,
) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let fetcher = move |req: PageRequest| {
        counter.fetch_add(1, Ordering::SeqCst);
        let idx = (req.page - 1) as usize;
        let items = pages.get(idx).cloned().unwrap_or_default();
        let page = if idx + 1 < pages.len() {
            Page::more(items, PageRequest::new(req.page + 1, req.per_page))
        } else {
            Page::last(items)
        };
        ready(Ok(page))
    };
    (fetcher, calls)
}

// ============================================================================
// Type Tests
// ============================================================================

#[test]
fn test_page_request_first() {
    let req = PageRequest::first(50);
    assert_eq!(req.page, 1);
    assert_eq!(req.per_page, 50);
    assert_eq!(
        req.query_params(),
        [("page", "1".to_string()), ("per_page", "50".to_string())]
    );
}

#[test]
fn test_next_page_helpers() {
    let next = NextPage::Continue(PageRequest::new(2, 20));
    assert!(next.is_continue());
    assert!(!next.is_done());
    assert_eq!(next.request(), Some(PageRequest::new(2, 20)));

    assert!(NextPage::Done.is_done());
    assert_eq!(NextPage::Done.request(), None);
}

#[test]
fn test_pagination_config_default() {
    let config = PaginationConfig::default();
    assert_eq!(config.per_page, MAX_PER_PAGE);
    assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
    assert!(config.max_items.is_none());
}

#[test_case(0, 1 ; "zero is raised to one")]
#[test_case(25, 25 ; "in range is kept")]
#[test_case(500, MAX_PER_PAGE ; "above provider max is clamped")]
fn test_pagination_config_per_page_clamp(requested: u32, expected: u32) {
    let config = PaginationConfig::with_per_page(requested);
    assert_eq!(config.per_page, expected);
    assert_eq!(config.first_request(), PageRequest::first(expected));
}

// ============================================================================
// Links Tests
// ============================================================================

#[test]
fn test_links_next_page_from_url() {
    let links: Links = serde_json::from_value(json!({
        "pages": {
            "last": "https://api.digitalocean.com/v2/droplets?page=3&per_page=20",
            "next": "https://api.digitalocean.com/v2/droplets?page=2&per_page=20"
        }
    }))
    .unwrap();

    assert!(!links.is_last_page());
    let next = links.next_page(&PageRequest::first(20)).unwrap();
    assert_eq!(next, NextPage::Continue(PageRequest::new(2, 20)));
}

#[test]
fn test_links_next_page_honors_gaps() {
    let links: Links = serde_json::from_value(json!({
        "pages": { "next": "https://api.digitalocean.com/v2/droplets?page=5" }
    }))
    .unwrap();

    let next = links.next_page(&PageRequest::new(2, 30)).unwrap();
    assert_eq!(next, NextPage::Continue(PageRequest::new(5, 30)));
}

#[test]
fn test_links_last_page() {
    let links: Links = serde_json::from_value(json!({
        "pages": {
            "first": "https://api.digitalocean.com/v2/droplets?page=1&per_page=20",
            "prev": "https://api.digitalocean.com/v2/droplets?page=2&per_page=20"
        }
    }))
    .unwrap();

    assert!(links.is_last_page());
    assert_eq!(
        links.next_page(&PageRequest::new(3, 20)).unwrap(),
        NextPage::Done
    );
}

#[test]
fn test_links_absent_means_done() {
    assert!(Links::default().is_last_page());
    assert_eq!(
        next_page_from(None, &PageRequest::first(20)).unwrap(),
        NextPage::Done
    );
}

#[test_case("https://api.digitalocean.com/v2/droplets?per_page=20" ; "missing page")]
#[test_case("https://api.digitalocean.com/v2/droplets?page=abc" ; "non numeric page")]
#[test_case("https://api.digitalocean.com/v2/droplets?page=0" ; "page zero")]
fn test_links_bad_next_is_decode_error(next: &str) {
    let links = Links {
        pages: Some(PageLinks {
            next: Some(next.to_string()),
            ..Default::default()
        }),
        actions: vec![],
    };

    let err = links.next_page(&PageRequest::first(20)).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[test]
fn test_links_unparsable_url() {
    let links = Links {
        pages: Some(PageLinks {
            next: Some("not a url".to_string()),
            ..Default::default()
        }),
        actions: vec![],
    };

    let err = links.next_page(&PageRequest::first(20)).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_links_find_action() {
    let links: Links = serde_json::from_value(json!({
        "actions": [
            { "id": 1, "rel": "multiple_create", "href": "https://api.digitalocean.com/v2/actions/1" },
            { "id": 2, "rel": "create", "href": "https://api.digitalocean.com/v2/actions/2" }
        ]
    }))
    .unwrap();

    let action = links.action("create").unwrap();
    assert_eq!(action.id, 2);
    assert!(links.action("power_off").is_none());
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_collect_concatenates_in_order() {
    let (fetcher, calls) = scripted(vec![vec!["A", "B"], vec!["C"], vec![]]);

    let items = Paginator::default().collect(&fetcher).await.unwrap();

    assert_eq!(items, vec!["A", "B", "C"]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_collect_many_pages_sum_of_lengths() {
    let pages: Vec<Vec<u32>> = (0..7u32)
        .map(|p| (0..(p % 3 + 1)).map(|i| p * 10 + i).collect())
        .collect();
    let expected: Vec<u32> = pages.iter().flatten().copied().collect();
    let (fetcher, calls) = scripted(pages);

    let items = Paginator::default().collect(&fetcher).await.unwrap();

    assert_eq!(items, expected);
    assert_eq!(calls.load(Ordering::SeqCst), 7);
}

#[tokio::test]
async fn test_collect_zero_pages() {
    let (fetcher, calls) = scripted::<String>(vec![vec![]]);

    let items = Paginator::default().collect(&fetcher).await.unwrap();

    assert!(items.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_collect_single_page_fetches_once() {
    let (fetcher, calls) = scripted(vec![vec![1, 2, 3]]);

    let items = Paginator::default().collect(&fetcher).await.unwrap();

    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test_case(1 ; "first page")]
#[test_case(2 ; "second page")]
#[test_case(5 ; "fifth page")]
#[tokio::test]
async fn test_collect_error_on_page_k(k: u32) {
    let calls = AtomicUsize::new(0);
    let fetcher = |req: PageRequest| {
        calls.fetch_add(1, Ordering::SeqCst);
        if req.page == k {
            ready(Err(Error::http_status(500, "boom")))
        } else {
            ready(Ok(Page::more(
                vec![req.page],
                PageRequest::new(req.page + 1, req.per_page),
            )))
        }
    };

    let err = Paginator::default().collect(&fetcher).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert_eq!(calls.load(Ordering::SeqCst), k as usize);
}

#[tokio::test]
async fn test_collect_is_idempotent() {
    let (fetcher, _) = scripted(vec![vec!["x", "y"], vec!["z"]]);
    let paginator = Paginator::default();

    let first = paginator.collect(&fetcher).await.unwrap();
    let second = paginator.collect(&fetcher).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_collect_non_terminating_hits_page_bound() {
    let calls = AtomicUsize::new(0);
    let fetcher = |req: PageRequest| {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        // Cap well beyond the bound so a broken paginator still ends the test.
        assert!(n < 10_000, "paginator kept fetching past its bound");
        ready(Ok(Page::more(
            vec![req.page],
            PageRequest::new(req.page + 1, req.per_page),
        )))
    };

    let paginator = Paginator::new(PaginationConfig::default().max_pages(10));
    let err = paginator.collect(&fetcher).await.unwrap_err();

    assert!(matches!(
        err,
        Error::PaginationBoundExceeded {
            limit: 10,
            unit: BoundUnit::Pages
        }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_collect_default_bound_terminates() {
    let calls = AtomicUsize::new(0);
    let fetcher = |req: PageRequest| {
        calls.fetch_add(1, Ordering::SeqCst);
        ready(Ok(Page::<u8>::more(
            vec![],
            PageRequest::new(req.page + 1, req.per_page),
        )))
    };

    let err = Paginator::default().collect(&fetcher).await.unwrap_err();

    assert!(matches!(err, Error::PaginationBoundExceeded { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), DEFAULT_MAX_PAGES);
}

#[tokio::test]
async fn test_collect_item_bound() {
    let (fetcher, calls) = scripted(vec![vec![1, 2], vec![3, 4], vec![5]]);

    let paginator = Paginator::new(PaginationConfig::default().max_items(3));
    let err = paginator.collect(&fetcher).await.unwrap_err();

    assert!(matches!(
        err,
        Error::PaginationBoundExceeded {
            limit: 3,
            unit: BoundUnit::Items
        }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_collect_item_bound_is_inclusive() {
    let (fetcher, _) = scripted(vec![vec![1, 2], vec![3]]);

    let paginator = Paginator::new(PaginationConfig::default().max_items(3));
    let items = paginator.collect(&fetcher).await.unwrap();

    assert_eq!(items, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_collect_follows_metadata_not_increment() {
    let requested = Mutex::new(Vec::new());
    let fetcher = |req: PageRequest| {
        requested.lock().unwrap().push(req.page);
        let page = match req.page {
            1 => Page::more(vec!["a"], PageRequest::new(3, req.per_page)),
            3 => Page::more(vec!["c"], PageRequest::new(7, req.per_page)),
            _ => Page::last(vec!["g"]),
        };
        ready(Ok(page))
    };

    let items = Paginator::default().collect(&fetcher).await.unwrap();

    assert_eq!(items, vec!["a", "c", "g"]);
    assert_eq!(*requested.lock().unwrap(), vec![1, 3, 7]);
}

#[tokio::test]
async fn test_collect_uses_configured_page_size() {
    let sizes = Mutex::new(Vec::new());
    let fetcher = |req: PageRequest| {
        sizes.lock().unwrap().push(req.per_page);
        ready(Ok(Page::last(vec![()])))
    };

    let paginator = Paginator::new(PaginationConfig::with_per_page(25));
    paginator.collect(&fetcher).await.unwrap();

    assert_eq!(*sizes.lock().unwrap(), vec![25]);
}

#[tokio::test]
async fn test_collect_detects_cycle() {
    let calls = AtomicUsize::new(0);
    let fetcher = |req: PageRequest| {
        calls.fetch_add(1, Ordering::SeqCst);
        let next = if req.page == 1 { 2 } else { 1 };
        ready(Ok(Page::more(
            vec![req.page],
            PageRequest::new(next, req.per_page),
        )))
    };

    let err = Paginator::default().collect(&fetcher).await.unwrap_err();

    assert!(matches!(err, Error::PaginationCycle { page: 1 }));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_collect_through_trait_object() {
    let (fetcher, _) = scripted(vec![vec!["one".to_string()], vec!["two".to_string()]]);
    let boxed: Box<dyn PageFetcher<String>> = Box::new(fetcher);

    let items = Paginator::default().collect(boxed.as_ref()).await.unwrap();

    assert_eq!(items, vec!["one".to_string(), "two".to_string()]);
}

#[test]
fn test_collect_blocking() {
    let (fetcher, calls) = scripted(vec![vec!['a'], vec!['b']]);

    let items = tokio_test::block_on(Paginator::default().collect(&fetcher));

    tokio_test::assert_ok!(&items);
    assert_eq!(items.unwrap(), vec!['a', 'b']);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
