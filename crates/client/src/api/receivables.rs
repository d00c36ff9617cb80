//! Accounts receivable API.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::RequestOptions;

/// Collection plan across contracts, optionally filtered by keyword.
pub async fn get_receivable_plan<C>(client: &C, keyword: Option<&str>) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    let options = RequestOptions::none().with_optional_param("keyword", keyword);
    client.get("/receivable/plan", options).await
}

pub async fn get_receivable_plan_by_contract<C>(
    client: &C,
    contract_number: &str,
) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(
            &format!("/receivable/plan/contract/{contract_number}"),
            RequestOptions::none(),
        )
        .await
}

pub async fn search_receivables<C>(client: &C, keyword: Option<&str>) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    let options = RequestOptions::none().with_optional_param("keyword", keyword);
    client.get("/receivable", options).await
}

pub async fn get_unpaid_receivables<C>(client: &C) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.get("/receivable/unpaid", RequestOptions::none()).await
}

pub async fn get_receivable_by_id<C>(client: &C, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .get(&format!("/receivable/{id}"), RequestOptions::none())
        .await
}

/// Record collected amounts or invoicing details against a receivable.
pub async fn update_receivable<C>(client: &C, id: &str, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .put(&format!("/receivable/{id}"), RequestOptions::json(data))
        .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::recording::RecordingClient;
    use crate::request::Method;

    #[tokio::test]
    async fn plan_by_contract_embeds_contract_number() {
        let client = RecordingClient::new();

        get_receivable_plan_by_contract(&client, "HT-001").await.unwrap();

        let req = client.single_request().unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/receivable/plan/contract/HT-001");
    }

    #[tokio::test]
    async fn search_and_update() {
        let client = RecordingClient::new();

        search_receivables(&client, Some("acme")).await.unwrap();
        get_receivable_plan(&client, None).await.unwrap();
        get_unpaid_receivables(&client).await.unwrap();
        get_receivable_by_id(&client, "r1").await.unwrap();
        update_receivable(&client, "r1", json!({ "receivedAmount": 1200 }))
            .await
            .unwrap();

        let reqs = client.requests();
        assert_eq!(reqs[0].path, "/receivable");
        assert_eq!(reqs[0].param("keyword"), Some("acme"));
        assert_eq!(reqs[1].path, "/receivable/plan");
        assert!(reqs[1].options.params.is_empty());
        assert_eq!(reqs[2].path, "/receivable/unpaid");
        assert_eq!(reqs[3].path, "/receivable/r1");
        assert_eq!(reqs[4].method, Method::Put);
        assert_eq!(reqs[4].body(), Some(&json!({ "receivedAmount": 1200 })));
    }
}
