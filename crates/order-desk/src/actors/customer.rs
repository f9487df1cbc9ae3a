use super::ignore_missing;
use crate::clients::OrderClient;
use crate::error::StoreError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::info;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Context = OrderClient;
    type Error = StoreError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
        })
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.name = update.name;
        self.email = update.email;
        self.phone = update.phone;
        Ok(())
    }

    /// Deletes the customer's orders (and, through them, their lines) first.
    async fn on_delete(&self, orders: &Self::Context) -> Result<(), Self::Error> {
        let owned = orders.orders_for_customer(self.id).await?;
        if !owned.is_empty() {
            info!(customer = %self.id, orders = owned.len(), "Cascading delete");
        }
        for order in owned {
            ignore_missing(orders.delete(order.id).await)?;
        }
        Ok(())
    }
}
