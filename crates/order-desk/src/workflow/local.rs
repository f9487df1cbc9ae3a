use super::{OrderApi, OrderApiError};
use crate::model::{Order, OrderCreate, OrderItem, OrderItemCreate};
use crate::service::{OrderItemService, OrderService, ResourceService, Services};
use async_trait::async_trait;

/// [`OrderApi`] that calls the resource services in-process.
#[derive(Clone)]
pub struct LocalOrderApi {
    orders: OrderService,
    order_items: OrderItemService,
}

impl LocalOrderApi {
    pub fn new(services: &Services) -> Self {
        Self {
            orders: services.orders.clone(),
            order_items: services.order_items.clone(),
        }
    }
}

#[async_trait]
impl OrderApi for LocalOrderApi {
    async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderApiError> {
        Ok(self.orders.create(params).await?.order)
    }

    async fn create_order_item(
        &self,
        params: OrderItemCreate,
    ) -> Result<OrderItem, OrderApiError> {
        Ok(self.order_items.create(params).await?.item)
    }
}
