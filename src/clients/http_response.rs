//! HTTP response type returned by a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// An HTTP response from the Octopus server.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` when the body was empty).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Creates a `200 OK` response with no headers, mostly useful for fakes.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, HashMap::new(), body)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `ErrorMessage` Octopus includes in error bodies, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("ErrorMessage").and_then(|v| v.as_str())
    }
}
