//! Paging metadata returned with list calls.
//!
//! List calls are stateless: the client keeps no cursor. The caller asks
//! for a page with [`ListParams`](crate::rest::ListParams), reads the
//! returned [`PagingInfo`], and decides whether to ask for the next one.

use serde::{Deserialize, Serialize};

/// The paging fields of a list response.
///
/// Every field is optional; the API omits some of them on large
/// collections.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::PagingInfo;
///
/// let paging: PagingInfo = serde_json::from_str(r#"{
///     "page": 0,
///     "page_size": 50,
///     "next_page_uri": "/2010-04-01/Accounts/AC1/Media.json?Page=1&PageSize=50"
/// }"#).unwrap();
///
/// assert!(paging.has_next_page());
/// assert_eq!(paging.next_page(), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    /// The zero-based index of this page.
    #[serde(default)]
    pub page: Option<u32>,
    /// The number of pages, when the API reports it.
    #[serde(default)]
    pub num_pages: Option<u32>,
    /// The requested page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// The total number of records, when the API reports it.
    #[serde(default)]
    pub total: Option<u64>,
    /// Index of the first record on this page.
    #[serde(default)]
    pub start: Option<u64>,
    /// Index of the last record on this page.
    #[serde(default)]
    pub end: Option<u64>,
    /// URI of this page.
    #[serde(default)]
    pub uri: Option<String>,
    /// URI of the first page.
    #[serde(default)]
    pub first_page_uri: Option<String>,
    /// URI of the next page; absent on the last page.
    #[serde(default)]
    pub next_page_uri: Option<String>,
    /// URI of the previous page; absent on the first page.
    #[serde(default)]
    pub previous_page_uri: Option<String>,
    /// URI of the last page.
    #[serde(default)]
    pub last_page_uri: Option<String>,
}

impl PagingInfo {
    /// Returns `true` if there is a page after this one.
    ///
    /// Uses `next_page_uri` when present, otherwise compares `page` with
    /// `num_pages`.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        if self.next_page_uri.as_deref().is_some_and(|uri| !uri.is_empty()) {
            return true;
        }
        match (self.page, self.num_pages) {
            (Some(page), Some(num_pages)) => page < num_pages.saturating_sub(1),
            _ => false,
        }
    }

    /// Returns `true` if there is a page before this one.
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.previous_page_uri
            .as_deref()
            .is_some_and(|uri| !uri.is_empty())
            || self.page.is_some_and(|page| page > 0)
    }

    /// Returns the number of the next page, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        if !self.has_next_page() {
            return None;
        }
        self.page.map_or(Some(1), |page| page.checked_add(1))
    }

    /// Returns `true` if the document carried none of the paging fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
