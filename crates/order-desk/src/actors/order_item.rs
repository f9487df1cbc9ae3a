use crate::error::StoreError;
use crate::model::{OrderItem, OrderItemCreate, OrderItemId, OrderItemUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for OrderItem {
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Update = OrderItemUpdate;
    type Context = ();
    type Error = StoreError;

    fn id(&self) -> &OrderItemId {
        &self.id
    }

    fn from_create_params(id: OrderItemId, params: OrderItemCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            order_id: params.order_id,
            product_id: params.product_id,
            quantity: params.quantity,
        })
    }

    async fn on_update(
        &mut self,
        update: OrderItemUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.quantity = update.quantity;
        Ok(())
    }
}
