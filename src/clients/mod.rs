//! HTTP client types for Octopus API communication.
//!
//! # Overview
//!
//! - [`Transport`]: the async seam every request goes through
//! - [`HttpClient`]: the reqwest-backed [`Transport`]
//! - [`Connection`]: a shared transport handle plus the server base URL
//! - [`HttpRequest`] / [`HttpResponse`]: what crosses the transport seam
//! - [`HttpError`]: transport-level failures
//!
//! # No Retries
//!
//! Requests are sent exactly once. Non-2xx responses surface as
//! [`HttpError::Response`] to whoever triggered the request.

mod connection;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use connection::Connection;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Query};
pub use http_response::HttpResponse;
pub use transport::Transport;

#[cfg(test)]
pub(crate) mod testing;
