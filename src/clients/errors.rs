//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the server
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for the transport layer
//!
//! # Example
//!
//! ```rust,ignore
//! use octopus_api::clients::HttpError;
//!
//! match connection.get(&url, None).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Response(e)) => println!("Octopus returned {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message is a compact JSON object holding the `ErrorMessage` and
/// `Errors` fields Octopus puts in error bodies, plus an `error_reference`
/// when the response carried a request id.
///
/// # Example
///
/// ```rust
/// use octopus_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"ErrorMessage":"The resource 'Deployments-1' was not found."}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("was not found"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request URL is empty.
    #[error("Cannot send a {method} request without a URL.")]
    EmptyUrl {
        /// The HTTP method of the rejected request.
        method: String,
    },
}

/// Unified error type for all transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the server answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
