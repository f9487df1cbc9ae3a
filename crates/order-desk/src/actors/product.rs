use super::ignore_missing;
use crate::clients::OrderItemClient;
use crate::error::StoreError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::info;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = OrderItemClient;
    type Error = StoreError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            stock: params.stock,
        })
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.name = update.name;
        self.price = update.price;
        self.stock = update.stock;
        Ok(())
    }

    /// Removes every order line that references the product.
    async fn on_delete(&self, items: &Self::Context) -> Result<(), Self::Error> {
        let lines = items.items_for_product(self.id).await?;
        if !lines.is_empty() {
            info!(product = %self.id, lines = lines.len(), "Cascading delete");
        }
        for line in lines {
            ignore_missing(items.delete(line.id).await)?;
        }
        Ok(())
    }
}
