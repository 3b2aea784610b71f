//! The transport seam between the resource layer and the network.
//!
//! Every node and paginator talks to the server through an `Arc<dyn Transport>`
//! held by a [`Connection`](crate::clients::Connection). [`HttpClient`](crate::clients::HttpClient)
//! is the reqwest-backed implementation; tests substitute scripted fakes.

use std::fmt;

use async_trait::async_trait;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends a single request and returns the parsed response.
///
/// Implementations must fail with [`HttpError::Response`] for any non-2xx
/// status rather than returning the response, and must not retry.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Sends `request` and waits for its response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
