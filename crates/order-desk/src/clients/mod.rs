//! # Store Clients
//!
//! One typed client per table. Each wraps a `ResourceClient`, maps framework errors into
//! [`StoreError`], and inherits list/get/create/update/delete from
//! [`ActorClient`]. Lookups by foreign key live here too; they are full scans, which is
//! what the tables support.

mod macros;

use crate::error::StoreError;
use crate::model::{Customer, CustomerId, Order, OrderId, OrderItem, Product, ProductId};
use macros::store_client;
use resource_actor::ActorClient;
use tracing::instrument;

store_client!(CustomerClient, Customer, customer);
store_client!(ProductClient, Product, product);
store_client!(OrderClient, Order, order);
store_client!(OrderItemClient, OrderItem, order_item);

impl OrderClient {
    /// Every order placed by `customer_id`.
    #[instrument(skip(self))]
    pub async fn orders_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, StoreError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.customer_id == customer_id)
            .collect())
    }
}

impl OrderItemClient {
    /// Every line of `order_id`.
    #[instrument(skip(self))]
    pub async fn items_for_order(&self, order_id: OrderId) -> Result<Vec<OrderItem>, StoreError> {
        let items = self.list().await?;
        Ok(items.into_iter().filter(|i| i.order_id == order_id).collect())
    }

    /// Every line, across all orders, that references `product_id`.
    #[instrument(skip(self))]
    pub async fn items_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<OrderItem>, StoreError> {
        let items = self.list().await?;
        Ok(items
            .into_iter()
            .filter(|i| i.product_id == product_id)
            .collect())
    }
}
