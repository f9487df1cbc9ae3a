use super::{OrderApi, OrderApiError};
use crate::model::{Order, OrderCreate, OrderItem, OrderItemCreate};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// [`OrderApi`] against a running server, e.g. `http://localhost:5222/api`.
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post<B, R>(&self, collection: &str, body: &B) -> Result<R, OrderApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{collection}", self.base_url);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OrderApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderApiError> {
        self.post("orders", &params).await
    }

    async fn create_order_item(
        &self,
        params: OrderItemCreate,
    ) -> Result<OrderItem, OrderApiError> {
        self.post("orderitems", &params).await
    }
}
