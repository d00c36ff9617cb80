//! Module (permission tree) management API.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::RequestOptions;

pub async fn list_modules<C>(client: &C) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.get("/modules", RequestOptions::none()).await
}

/// Modules arranged as a tree (parents carry their `children`).
pub async fn get_module_tree<C>(client: &C) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.get("/modules/tree", RequestOptions::none()).await
}

pub async fn create_module<C>(client: &C, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.post("/modules", RequestOptions::json(data)).await
}

pub async fn update_module<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .put(&format!("/modules/{id}"), RequestOptions::json(data))
        .await
}

pub async fn delete_module<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .delete(&format!("/modules/{id}"), RequestOptions::none())
        .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::recording::RecordingClient;
    use crate::request::Method;

    #[tokio::test]
    async fn tree_and_crud_paths() {
        let client = RecordingClient::new();

        list_modules(&client).await.unwrap();
        get_module_tree(&client).await.unwrap();
        create_module(&client, json!({ "zhName": "合同管理" })).await.unwrap();
        update_module(&client, "m1", json!({ "visible": false })).await.unwrap();
        delete_module(&client, "m1").await.unwrap();

        let seen: Vec<_> = client
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            seen,
            vec![
                (Method::Get, "/modules".to_string()),
                (Method::Get, "/modules/tree".to_string()),
                (Method::Post, "/modules".to_string()),
                (Method::Put, "/modules/m1".to_string()),
                (Method::Delete, "/modules/m1".to_string()),
            ]
        );
    }
}
