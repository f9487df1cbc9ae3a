use super::ignore_missing;
use crate::clients::OrderItemClient;
use crate::error::StoreError;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = OrderItemClient;
    type Error = StoreError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Stamps the order with the current time unless the payload carried a date.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            customer_id: params.customer_id,
            order_date: params.order_date.unwrap_or_else(Utc::now),
            status: params.status,
        })
    }

    /// Only the status moves; the customer and date are fixed at creation.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.status = update.status;
        Ok(())
    }

    async fn on_delete(&self, items: &Self::Context) -> Result<(), Self::Error> {
        let lines = items.items_for_order(self.id).await?;
        if !lines.is_empty() {
            info!(order = %self.id, lines = lines.len(), "Cascading delete");
        }
        for line in lines {
            ignore_missing(items.delete(line.id).await)?;
        }
        Ok(())
    }
}
