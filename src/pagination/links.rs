//! Provider link metadata
//!
//! Every listing response carries a `links` object shaped the same way
//! regardless of the resource, plus an optional `meta.total`:
//!
//! ```json
//! {
//!   "droplets": [ ... ],
//!   "links": {
//!     "pages": { "last": "https://api.../v2/droplets?page=3&per_page=20",
//!                "next": "https://api.../v2/droplets?page=2&per_page=20" },
//!     "actions": [ { "id": 7, "rel": "create", "href": "https://api.../v2/actions/7" } ]
//!   },
//!   "meta": { "total": 45 }
//! }
//! ```

use super::types::{NextPage, PageRequest};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// The `links` object of a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Page navigation links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<PageLinks>,

    /// Actions started by the request (create responses)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<LinkAction>,
}

/// Page navigation URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Reference to an action started by a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAction {
    pub id: u64,
    pub rel: String,
    pub href: String,
}

/// The `meta` object of a listing response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: u64,
}

impl Links {
    /// True when no `next` link is advertised
    pub fn is_last_page(&self) -> bool {
        self.next_link().is_none()
    }

    fn next_link(&self) -> Option<&str> {
        self.pages
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Derive the request for the page after `current`.
    ///
    /// The page number comes from the `next` URL. A missing `per_page`
    /// keeps the current page size.
    pub fn next_page(&self, current: &PageRequest) -> Result<NextPage> {
        let Some(next) = self.next_link() else {
            return Ok(NextPage::Done);
        };

        let url = Url::parse(next)?;
        let mut page = None;
        let mut per_page = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "page" => page = Some(parse_page_param(next, "page", &value)?),
                "per_page" => per_page = Some(parse_page_param(next, "per_page", &value)?),
                _ => {}
            }
        }

        let page = page.ok_or_else(|| {
            Error::decode(format!("next link '{next}' has no 'page' parameter"))
        })?;

        Ok(NextPage::Continue(PageRequest::new(
            page,
            per_page.unwrap_or(current.per_page),
        )))
    }

    /// Find the action link with the given relation
    pub fn action(&self, rel: &str) -> Option<&LinkAction> {
        self.actions.iter().find(|a| a.rel == rel)
    }
}

fn parse_page_param(link: &str, name: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::decode(format!(
            "next link '{link}' has invalid '{name}' value '{value}'"
        ))),
    }
}

/// Derive the next page from an optional `links` object
pub fn next_page_from(links: Option<&Links>, current: &PageRequest) -> Result<NextPage> {
    match links {
        Some(links) => links.next_page(current),
        None => Ok(NextPage::Done),
    }
}
