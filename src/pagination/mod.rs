//! Pagination envelope of the Travis CI API.
//!
//! Collection responses carry an `@pagination` object next to the items:
//!
//! ```json
//! {"repositories": [...],
//!  "@pagination": {"limit": 25, "offset": 0, "count": 2,
//!                  "is_first": true, "is_last": true,
//!                  "next": null, "prev": null,
//!                  "first": {"@href": "/repos", "offset": 0, "limit": 25},
//!                  "last": {"@href": "/repos?limit=25&offset=-25", "offset": -25, "limit": 25}}}
//! ```

use crate::errors::{TravisError, TravisResult};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// A link to another page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Path of the page, relative to the API base URL.
    #[serde(rename = "@href")]
    pub href: String,
    /// Offset of the page. The API may report negative offsets.
    pub offset: i64,
    /// Page size.
    pub limit: u32,
}

/// The `@pagination` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size.
    #[serde(default)]
    pub limit: u32,
    /// Offset of the current page.
    #[serde(default)]
    pub offset: u32,
    /// Total number of items in the collection.
    #[serde(default)]
    pub count: u32,
    /// Whether this is the first page.
    #[serde(default)]
    pub is_first: bool,
    /// Whether this is the last page.
    #[serde(default)]
    pub is_last: bool,
    /// Link to the next page.
    #[serde(default)]
    pub next: Option<PageLink>,
    /// Link to the previous page.
    #[serde(default)]
    pub prev: Option<PageLink>,
    /// Link to the first page.
    #[serde(default)]
    pub first: Option<PageLink>,
    /// Link to the last page.
    #[serde(default)]
    pub last: Option<PageLink>,
}

impl Pagination {
    /// Extracts the `@pagination` envelope from a response body.
    ///
    /// Returns `Ok(None)` when the key is absent or `null`. An envelope that
    /// is present but malformed is a deserialization error.
    pub fn from_body(body: &[u8]) -> TravisResult<Option<Self>> {
        let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
            TravisError::deserialization(format!("Failed to parse response body: {}", e)).with_cause(e)
        })?;

        match value.get("@pagination") {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(envelope) => Pagination::deserialize(envelope).map(Some).map_err(|e| {
                TravisError::deserialization(format!("Failed to deserialize @pagination: {}", e))
                    .with_cause(e)
            }),
        }
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if there is a previous page.
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }
}

/// Metadata of a completed API call.
///
/// Carries the HTTP status and headers alongside the decoded pagination
/// envelope. `pagination` is `None` for single-resource responses.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Pagination envelope.
    pub pagination: Option<Pagination>,
}

impl Response {
    /// Creates a response wrapper.
    pub fn new(status: u16, headers: HeaderMap, pagination: Option<Pagination>) -> Self {
        Self {
            status,
            headers,
            pagination,
        }
    }

    /// Page size, 0 when not paginated.
    pub fn limit(&self) -> u32 {
        self.pagination.as_ref().map_or(0, |p| p.limit)
    }

    /// Current offset, 0 when not paginated.
    pub fn offset(&self) -> u32 {
        self.pagination.as_ref().map_or(0, |p| p.offset)
    }

    /// Collection size, 0 when not paginated.
    pub fn count(&self) -> u32 {
        self.pagination.as_ref().map_or(0, |p| p.count)
    }

    /// Whether this is the first page.
    pub fn is_first(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.is_first)
    }

    /// Whether this is the last page.
    pub fn is_last(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.is_last)
    }

    /// Link to the next page.
    pub fn next_page(&self) -> Option<&PageLink> {
        self.pagination.as_ref().and_then(|p| p.next.as_ref())
    }

    /// Link to the previous page.
    pub fn prev_page(&self) -> Option<&PageLink> {
        self.pagination.as_ref().and_then(|p| p.prev.as_ref())
    }

    /// Link to the first page.
    pub fn first_page(&self) -> Option<&PageLink> {
        self.pagination.as_ref().and_then(|p| p.first.as_ref())
    }

    /// Link to the last page.
    pub fn last_page(&self) -> Option<&PageLink> {
        self.pagination.as_ref().and_then(|p| p.last.as_ref())
    }
}
