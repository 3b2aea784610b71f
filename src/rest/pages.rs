//! Lazy traversal of paged list endpoints.
//!
//! Octopus list endpoints answer with one page at a time:
//!
//! ```json
//! {
//!   "Items": [ { "Id": "Deployments-1", ... }, ... ],
//!   "Links": { "Page.Next": "/api/deployments?skip=30&take=30" }
//! }
//! ```
//!
//! [`Pages`] hides that: it hands out one typed resource per call and only
//! goes back to the server once the buffered page is used up. A page without
//! `Page.Next` is the last one.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut deployments = api.deployments(None);
//! while let Some(deployment) = deployments.next_item().await? {
//!     println!("{:?}", deployment.id());
//! }
//!
//! // Or as a stream
//! use futures::TryStreamExt;
//! let releases: Vec<Release> = api.releases(None).into_stream().try_collect().await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use futures::Stream;
use serde_json::Value;

use crate::clients::{Connection, Query};
use crate::rest::links::PAGE_NEXT;
use crate::rest::{ApiResource, ResourceError};

/// A forward-only, lazy, single-use sequence of `T` spread over server pages.
///
/// Construction performs no I/O. Each call to [`next_item`](Self::next_item)
/// advances a cursor into the buffered page and fetches the next page only
/// when the cursor runs past its end. Once the last page is used up the
/// sequence stays exhausted.
///
/// The query parameters passed to [`new`](Self::new) are sent with the first
/// page request only; later requests follow the server's `Page.Next` link,
/// which already carries the continuation parameters.
pub struct Pages<T> {
    connection: Connection,
    url_next: Option<String>,
    parameters: Option<Query>,
    page: Option<Value>,
    index: isize,
    resource: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Pages<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pages")
            .field("url_next", &self.url_next)
            .field("parameters", &self.parameters)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<T: ApiResource> Pages<T> {
    /// Creates a sequence starting at `url`. Nothing is fetched yet.
    #[must_use]
    pub fn new(connection: Connection, url: impl Into<String>, parameters: Option<Query>) -> Self {
        Self {
            connection,
            url_next: Some(url.into()),
            parameters,
            page: None,
            index: -1,
            resource: PhantomData,
        }
    }

    /// Returns the URL the next page fetch will use, if any page remains.
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        self.url_next.as_deref()
    }

    /// Returns `true` once the last page has been fetched and fully consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.url_next.is_none() && self.remaining_in_page() == 0
    }

    /// Returns the next resource, fetching a new page when the buffered one
    /// is used up. Returns `Ok(None)` at the end of the sequence, and keeps
    /// returning it on every later call without touching the network.
    ///
    /// Empty pages are skipped as long as a `Page.Next` link is present.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if a page fetch fails; the failed page
    /// is requested again on the next call. Returns
    /// [`ResourceError::InvalidPayload`] if an item is not a JSON object.
    pub async fn next_item(&mut self) -> Result<Option<T>, ResourceError> {
        loop {
            self.index += 1;

            if let Some(item) = self.take_current_item() {
                return T::from_value(self.connection.clone(), item).map(Some);
            }

            let Some(url) = self.url_next.clone() else {
                return Ok(None);
            };
            self.fetch_page(&url).await?;
        }
    }

    /// Drains the rest of the sequence into a `Vec`.
    ///
    /// # Errors
    ///
    /// Fails on the first error [`next_item`](Self::next_item) returns.
    pub async fn try_collect_all(mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.next_item().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Adapts the sequence to a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<T, ResourceError>> {
        futures::stream::try_unfold(self, |mut pages| async move {
            let item = pages.next_item().await?;
            Ok(item.map(|item| (item, pages)))
        })
    }

    async fn fetch_page(&mut self, url: &str) -> Result<(), ResourceError> {
        tracing::debug!(
            resource = T::NAME,
            url = %url,
            parameters = ?self.parameters,
            "fetching page"
        );

        let page = self.connection.get(url, self.parameters.as_ref()).await?;

        // continuation links carry their own query string from here on
        self.parameters = None;
        self.url_next = page
            .get("Links")
            .and_then(|links| links.get(PAGE_NEXT))
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
            .map(|link| self.connection.resolve(link));
        self.page = Some(page);
        self.index = -1;

        Ok(())
    }

    fn items_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.page
            .as_mut()
            .and_then(|page| page.get_mut("Items"))
            .and_then(Value::as_array_mut)
    }

    fn take_current_item(&mut self) -> Option<Value> {
        let index = usize::try_from(self.index).ok()?;
        self.items_mut()?.get_mut(index).map(std::mem::take)
    }

    fn remaining_in_page(&self) -> usize {
        let len = self
            .page
            .as_ref()
            .and_then(|page| page.get("Items"))
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        let consumed = usize::try_from(self.index.saturating_add(1)).unwrap_or(0);
        len.saturating_sub(consumed)
    }
}
