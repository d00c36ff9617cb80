//! In-memory HTTP client for tests/dev.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;
use crate::request::ApiRequest;

/// Records every request and answers from a queue of scripted responses.
///
/// - No IO
/// - Responses are consumed in order; an empty queue answers `null`
#[derive(Debug, Default)]
pub struct RecordingClient {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResult<Value>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn respond_with(&self, body: Value) -> &Self {
        self.push(Ok(body));
        self
    }

    /// Queue a failure.
    pub fn fail_with(&self, error: ApiError) -> &Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: ApiResult<Value>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    /// Snapshot of every request sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// The only request sent so far, if exactly one was sent.
    pub fn single_request(&self) -> Option<ApiRequest> {
        let requests = self.requests();
        match requests.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        }
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        tracing::debug!(method = %request.method, path = %request.path, "recorded request");

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        self.responses
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or(Ok(Value::Null))
    }
}
