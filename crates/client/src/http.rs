//! The HTTP client contract.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::request::{ApiRequest, Method, RequestOptions};

/// Issues REST calls and returns the decoded response body.
///
/// Implementations resolve to the parsed JSON body on 2xx (an empty body
/// decodes to `Value::Null`) and reject on any non-2xx status or transport
/// failure. No retries are expected at this layer.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a single request.
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;

    async fn get(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        self.send(ApiRequest::new(Method::Get, path, options)).await
    }

    async fn post(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        self.send(ApiRequest::new(Method::Post, path, options)).await
    }

    async fn put(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        self.send(ApiRequest::new(Method::Put, path, options)).await
    }

    async fn delete(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        self.send(ApiRequest::new(Method::Delete, path, options)).await
    }
}

#[async_trait]
impl<T> HttpClient for std::sync::Arc<T>
where
    T: HttpClient + ?Sized,
{
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        (**self).send(request).await
    }
}
