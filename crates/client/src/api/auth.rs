//! Authentication endpoints.

use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::RequestOptions;

pub const LOGIN_PATH: &str = "/auth/login";

/// Exchange credentials for a session (`POST /auth/login`).
pub async fn login<C>(client: &C, username: &str, password: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    let body = json!({ "username": username, "password": password });
    client.post(LOGIN_PATH, RequestOptions::json(body)).await
}
