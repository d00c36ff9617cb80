//! reqwest-backed HTTP client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use rootmanage_core::{KeyValueStorage, keys};

use crate::error::{ApiError, ApiResult};
use crate::http::HttpClient;
use crate::request::{ApiRequest, Method};

/// Client for the rootmanage REST API.
///
/// When a token storage is attached, the persisted session token is read on
/// every request and sent as a bearer token, so a login or logout is picked
/// up by the next call without rebuilding the client.
#[derive(Clone)]
pub struct ReqwestClient {
    api_url: String,
    http: reqwest::Client,
    token_storage: Option<Arc<dyn KeyValueStorage>>,
}

impl core::fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("api_url", &self.api_url)
            .field("token_storage", &self.token_storage.is_some())
            .finish()
    }
}

impl ReqwestClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base(api_url.into()),
            http: reqwest::Client::new(),
            token_storage: None,
        }
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(api_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            api_url: normalize_base(api_url.into()),
            http,
            token_storage: None,
        })
    }

    /// Attach the storage the session token is read from.
    pub fn with_token_storage(mut self, storage: Arc<dyn KeyValueStorage>) -> Self {
        self.token_storage = Some(storage);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }

    fn bearer_token(&self) -> Option<String> {
        let storage = self.token_storage.as_ref()?;
        match storage.get(keys::TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!("failed to read session token: {err}");
                None
            }
        }
    }
}

fn normalize_base(mut api_url: String) -> String {
    while api_url.ends_with('/') {
        api_url.pop();
    }
    api_url
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.url(&request.path);
        let mut req = self.http.request(to_reqwest(request.method), &url);

        if !request.options.params.is_empty() {
            req = req.query(&request.options.params);
        }
        if let Some(body) = &request.options.body {
            req = req.json(body);
        }
        if let Some(token) = self.bearer_token() {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "api call completed"
        );

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
