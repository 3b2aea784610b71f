//! Scripted in-memory transport for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::{HttpError, HttpRequest, HttpResponse, HttpResponseError, Transport};

/// Answers requests from per-URL queues and records every request it sees.
///
/// Unscripted URLs answer 404.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<String, VecDeque<Result<Value, u16>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, url: &str, body: Value) {
        self.push(url, Ok(body));
    }

    pub fn fail(&self, url: &str, code: u16) {
        self.push(url, Err(code));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, url: &str, outcome: Result<Value, u16>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(outcome);
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let outcome = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&request.url)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(404));
        self.requests.lock().unwrap().push(request);

        outcome.map(HttpResponse::ok).map_err(|code| {
            HttpError::Response(HttpResponseError {
                code,
                message: format!(r#"{{"ErrorMessage":"scripted {code}"}}"#),
                error_reference: None,
            })
        })
    }
}
