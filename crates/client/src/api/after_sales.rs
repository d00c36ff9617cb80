//! After-sales service order API.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::RequestOptions;

pub async fn get_after_sales_list<C>(client: &C, keyword: Option<&str>) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    let options = RequestOptions::none().with_optional_param("keyword", keyword);
    client.get("/after-sales", options).await
}

pub async fn get_after_sales_by_id<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(&format!("/after-sales/{id}"), RequestOptions::none())
        .await
}

pub async fn create_after_sales<C>(client: &C, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.post("/after-sales", RequestOptions::json(data)).await
}

pub async fn update_after_sales<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .put(&format!("/after-sales/{id}"), RequestOptions::json(data))
        .await
}

pub async fn delete_after_sales<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .delete(&format!("/after-sales/{id}"), RequestOptions::none())
        .await
}

pub async fn assign_handler<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .post(
            &format!("/after-sales/{id}/assign-handler"),
            RequestOptions::json(data),
        )
        .await
}

/// Orders still waiting on the given handler.
pub async fn get_pending_by_handler<C>(client: &C, handler_id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(
            &format!("/after-sales/pending/{handler_id}"),
            RequestOptions::none(),
        )
        .await
}

pub async fn add_activity<C>(client: &C, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .post("/after-sales/activities", RequestOptions::json(data))
        .await
}

pub async fn get_activities<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(&format!("/after-sales/{id}/activities"), RequestOptions::none())
        .await
}

pub async fn complete_service<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .post(&format!("/after-sales/{id}/complete"), RequestOptions::json(data))
        .await
}

pub async fn evaluate_service<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .post(&format!("/after-sales/{id}/evaluate"), RequestOptions::json(data))
        .await
}

pub async fn get_completed_orders<C>(client: &C) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get("/after-sales/completed", RequestOptions::none())
        .await
}

pub async fn get_orders_for_evaluation<C>(client: &C) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get("/after-sales/for-evaluation", RequestOptions::none())
        .await
}
