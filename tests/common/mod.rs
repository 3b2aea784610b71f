//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use octopus_api::clients::{HttpError, HttpRequest, HttpResponse, HttpResponseError, Transport};
use octopus_api::OctopusApi;
use serde_json::{json, Value};

pub const BASE: &str = "https://octopus.test";

/// An in-memory Octopus server: answers each URL from a queue of scripted
/// outcomes and records every request it receives.
///
/// Mirrors the crate's unit-test `ScriptedTransport`, but takes paths
/// relative to [`BASE`] and chains. Unscripted URLs answer 404.
#[derive(Debug, Default)]
pub struct FakeOctopus {
    scripts: Mutex<HashMap<String, VecDeque<Result<Value, u16>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeOctopus {
    /// Queues a 200 response for `path` (relative to [`BASE`]).
    pub fn respond(&self, path: &str, body: Value) -> &Self {
        self.push(path, Ok(body))
    }

    /// Queues an error status for `path`.
    pub fn fail(&self, path: &str, code: u16) -> &Self {
        self.push(path, Err(code))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    fn push(&self, path: &str, outcome: Result<Value, u16>) -> &Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(format!("{BASE}{path}"))
            .or_default()
            .push_back(outcome);
        self
    }
}

#[async_trait]
impl Transport for FakeOctopus {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let outcome = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&request.url)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(404));
        self.requests.lock().unwrap().push(request);

        match outcome {
            Ok(body) => Ok(HttpResponse::ok(body)),
            Err(code) => Err(HttpError::Response(HttpResponseError {
                code,
                message: json!({"ErrorMessage": format!("scripted {code}")}).to_string(),
                error_reference: None,
            })),
        }
    }
}

/// Creates a facade over a fresh fake server.
pub fn fake_api() -> (Arc<FakeOctopus>, OctopusApi) {
    let server = Arc::new(FakeOctopus::default());
    let api = OctopusApi::with_transport(server.clone(), BASE);
    (server, api)
}

/// Builds one page of a list response.
pub fn page(items: Vec<Value>, next: Option<&str>) -> Value {
    let links = next.map_or_else(|| json!({}), |next| json!({"Page.Next": next}));
    json!({"Items": items, "Links": links})
}

/// Builds `count` minimal items with ids `{prefix}-{start}` onward.
pub fn items(prefix: &str, start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|n| json!({"Id": format!("{prefix}-{n}")}))
        .collect()
}
