//! Mall administration API.
//!
//! The five mall collections share one CRUD shape under `/mall/{collection}`.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::request::RequestOptions;

/// A mall collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MallCollection {
    AdSettings,
    MallType,
    Stores,
    Products,
    Orders,
}

impl MallCollection {
    pub const ALL: [MallCollection; 5] = [
        MallCollection::AdSettings,
        MallCollection::MallType,
        MallCollection::Stores,
        MallCollection::Products,
        MallCollection::Orders,
    ];

    /// Path segment under `/mall`.
    pub fn segment(&self) -> &'static str {
        match self {
            MallCollection::AdSettings => "ad-settings",
            MallCollection::MallType => "mall-type",
            MallCollection::Stores => "stores",
            MallCollection::Products => "products",
            MallCollection::Orders => "orders",
        }
    }

    fn path(&self) -> String {
        format!("/mall/{}", self.segment())
    }

    fn item_path(&self, id: &str) -> String {
        format!("/mall/{}/{id}", self.segment())
    }
}

pub async fn list<C>(client: &C, collection: MallCollection) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client.get(&collection.path(), RequestOptions::none()).await
}

pub async fn create<C>(client: &C, collection: MallCollection, data: Value) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .post(&collection.path(), RequestOptions::json(data))
        .await
}

pub async fn update<C>(
    client: &C,
    collection: MallCollection,
    id: &str,
    data: Value,
) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .put(&collection.item_path(id), RequestOptions::json(data))
        .await
}

pub async fn delete<C>(client: &C, collection: MallCollection, id: &str) -> ApiResult<Value>
where
    C: HttpClient + ?Sized,
{
    client
        .delete(&collection.item_path(id), RequestOptions::none())
        .await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::recording::RecordingClient;
    use crate::request::Method;

    #[tokio::test]
    async fn every_collection_maps_to_its_segment() {
        let client = RecordingClient::new();

        for collection in MallCollection::ALL {
            list(&client, collection).await.unwrap();
        }

        let paths: Vec<_> = client.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/mall/ad-settings",
                "/mall/mall-type",
                "/mall/stores",
                "/mall/products",
                "/mall/orders",
            ]
        );
    }

    #[tokio::test]
    async fn item_operations_embed_id() {
        let client = RecordingClient::new();

        create(&client, MallCollection::Stores, json!({ "name": "Flagship" }))
            .await
            .unwrap();
        update(&client, MallCollection::Stores, "s1", json!({ "name": "Outlet" }))
            .await
            .unwrap();
        delete(&client, MallCollection::Orders, "o7").await.unwrap();

        let reqs = client.requests();
        assert_eq!((reqs[0].method, reqs[0].path.as_str()), (Method::Post, "/mall/stores"));
        assert_eq!((reqs[1].method, reqs[1].path.as_str()), (Method::Put, "/mall/stores/s1"));
        assert_eq!(
            (reqs[2].method, reqs[2].path.as_str()),
            (Method::Delete, "/mall/orders/o7")
        );
    }
}
