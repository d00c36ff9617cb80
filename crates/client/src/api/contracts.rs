//! Contract management API.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::RequestOptions;

/// List contracts, optionally filtered by keyword (number, name or customer).
pub async fn get_contract_list<C>(client: &C, keyword: Option<&str>) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    let options = RequestOptions::none().with_optional_param("keyword", keyword);
    client.get("/contracts", options).await
}

pub async fn get_contract_by_id<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.get(&format!("/contracts/{id}"), RequestOptions::none()).await
}

pub async fn create_contract<C>(client: &C, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.post("/contracts", RequestOptions::json(data)).await
}

pub async fn update_contract<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .put(&format!("/contracts/{id}"), RequestOptions::json(data))
        .await
}

pub async fn delete_contract<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .delete(&format!("/contracts/{id}"), RequestOptions::none())
        .await
}

/// Save a contract as a draft without starting approval.
pub async fn save_contract_draft<C>(client: &C, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.post("/contracts/save", RequestOptions::json(data)).await
}

/// Start the approval workflow with the given approval node configuration.
pub async fn submit_contract_approval<C>(client: &C, id: &str, config: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .post(&format!("/contracts/{id}/submit"), RequestOptions::json(config))
        .await
}

/// Record an approval decision for the current workflow node.
pub async fn approve_contract<C>(
    client: &C,
    id: &str,
    approved: bool,
    remark: Option<&str>,
) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    let options = RequestOptions::none()
        .with_param("approved", approved)
        .with_optional_param("remark", remark);
    client.post(&format!("/contracts/{id}/approve"), options).await
}

pub async fn get_workflow_status<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(&format!("/contracts/{id}/workflow-status"), RequestOptions::none())
        .await
}

/// Design, machining, purchasing and assembly progress of one contract.
pub async fn get_execution_progress<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(&format!("/contracts/{id}/execution-progress"), RequestOptions::none())
        .await
}

pub async fn update_execution_progress<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .put(
            &format!("/contracts/{id}/execution-progress"),
            RequestOptions::json(data),
        )
        .await
}

pub async fn get_all_execution_progress<C>(client: &C) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get("/contracts/execution-progress/list", RequestOptions::none())
        .await
}
