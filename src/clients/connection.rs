//! The shared handle every node and paginator uses to reach the server.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, HttpRequest, Query, Transport};

/// A transport handle bundled with the server's base URL.
///
/// A `Connection` is immutable and cheap to clone; one instance is shared by
/// every [`ResourceNode`](crate::rest::ResourceNode) and
/// [`Pages`](crate::rest::Pages) spawned from the same
/// [`OctopusApi`](crate::OctopusApi).
#[derive(Clone)]
pub struct Connection {
    transport: Arc<dyn Transport>,
    url_base: Arc<str>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("url_base", &self.url_base)
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Creates a connection rooted at `url_base`. Trailing slashes are trimmed.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, url_base: impl AsRef<str>) -> Self {
        Self {
            transport,
            url_base: Arc::from(url_base.as_ref().trim_end_matches('/')),
        }
    }

    /// Returns the server base URL (no trailing slash).
    #[must_use]
    pub fn url_base(&self) -> &str {
        &self.url_base
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Resolves a partial URL from a `Links` collection against the base URL.
    ///
    /// Absolute `http(s)://` URLs are returned unchanged; anything else is
    /// appended to the base with exactly one `/` in between.
    ///
    /// ```rust,ignore
    /// assert_eq!(
    ///     connection.resolve("/api/projects/Projects-1"),
    ///     "https://octopus.example.com/api/projects/Projects-1"
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            return link.to_string();
        }
        format!("{}/{}", self.url_base, link.trim_start_matches('/'))
    }

    /// Sends a GET request and returns the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation, network, or non-2xx failures.
    pub async fn get(&self, url: &str, query: Option<&Query>) -> Result<Value, HttpError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, url);
        if let Some(query) = query {
            builder = builder.query(query.clone());
        }
        let response = self.transport.send(builder.build()?).await?;
        Ok(response.body)
    }

    /// Sends a POST request with a JSON body and returns the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation, network, or non-2xx failures.
    pub async fn post(&self, url: &str, body: Value) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, url)
            .body(body)
            .build()?;
        let response = self.transport.send(request).await?;
        Ok(response.body)
    }

    /// Sends a PUT request with a JSON body and returns the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for request validation, network, or non-2xx failures.
    pub async fn put(&self, url: &str, body: Value) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, url)
            .body(body)
            .build()?;
        let response = self.transport.send(request).await?;
        Ok(response.body)
    }
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct EchoTransport {
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for EchoTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let body = json!({
                "method": request.http_method.to_string(),
                "url": request.url.clone(),
                "body": request.body.clone(),
            });
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse::ok(body))
        }
    }

    fn connection() -> (Arc<EchoTransport>, Connection) {
        let transport = Arc::new(EchoTransport::default());
        let connection = Connection::new(transport.clone(), "https://octopus.example.com/");
        (transport, connection)
    }

    #[test]
    fn test_url_base_trims_trailing_slash() {
        let (_, connection) = connection();
        assert_eq!(connection.url_base(), "https://octopus.example.com");
    }

    #[test]
    fn test_resolve_joins_with_single_slash() {
        let (_, connection) = connection();
        assert_eq!(
            connection.resolve("/api/projects/Projects-1"),
            "https://octopus.example.com/api/projects/Projects-1"
        );
        assert_eq!(
            connection.resolve("api/deployments?skip=30"),
            "https://octopus.example.com/api/deployments?skip=30"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_urls() {
        let (_, connection) = connection();
        assert_eq!(
            connection.resolve("https://other.example.com/api/users/Users-1"),
            "https://other.example.com/api/users/Users-1"
        );
    }

    #[tokio::test]
    async fn test_get_forwards_query() {
        let (transport, connection) = connection();
        let mut query = Query::new();
        query.insert("take".to_string(), "10".to_string());

        connection
            .get("https://octopus.example.com/api/tasks", Some(&query))
            .await
            .unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].http_method, HttpMethod::Get);
        assert_eq!(seen[0].query.as_ref(), Some(&query));
    }

    #[tokio::test]
    async fn test_put_sends_body_and_returns_response_body() {
        let (_, connection) = connection();

        let body = connection
            .put(
                "https://octopus.example.com/api/projects/Projects-1",
                json!({"Name": "Web"}),
            )
            .await
            .unwrap();

        assert_eq!(body["method"], "put");
        assert_eq!(body["body"], json!({"Name": "Web"}));
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected_before_sending() {
        let (transport, connection) = connection();

        let result = connection.get("", None).await;

        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
        assert!(transport.seen.lock().unwrap().is_empty());
    }
}
