//! # Resource Services
//!
//! One generic [`ResourceService`] drives all four tables. An implementation only names its
//! entity, its client and its view, and says how rows are expanded into views; listing,
//! lookup, create, update and delete come for free.
//!
//! Views break the reference cycles of the data model by nesting each relation in one
//! direction only:
//!
//! | Entity | View adds |
//! |---|---|
//! | Customer | nothing |
//! | Product | nothing |
//! | Order | its `customer` and its `orderItems` (bare lines) |
//! | OrderItem | its `product` and its `order` (bare header) |
//!
//! A relation whose row no longer exists is left out of the view.

mod customer;
mod order;
mod order_item;
mod product;

pub use customer::CustomerService;
pub use order::{OrderService, OrderView};
pub use order_item::{OrderItemService, OrderItemView};
pub use product::ProductService;

use crate::clients::{CustomerClient, OrderClient, OrderItemClient, ProductClient};
use crate::error::StoreError;
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use serde::Serialize;
use tracing::debug;

/// Identity type of a service's entity.
pub type IdOf<S> = <<S as ResourceService>::Entity as ActorEntity>::Id;
/// Create payload of a service's entity.
pub type CreateOf<S> = <<S as ResourceService>::Entity as ActorEntity>::Create;
/// Update payload of a service's entity.
pub type UpdateOf<S> = <<S as ResourceService>::Entity as ActorEntity>::Update;

/// CRUD over one table, returning eager-loaded views.
///
/// Every write goes straight to the store and is visible to the next request; there is no
/// batching and no transaction spanning tables.
#[async_trait]
pub trait ResourceService: Clone + Send + Sync + 'static {
    type Entity: ActorEntity;
    type Client: ActorClient<Self::Entity, Error = StoreError>;
    type View: Serialize + Send + Sync + 'static;

    /// Path segment under `/api`, e.g. `"orderitems"`.
    const COLLECTION: &'static str;
    /// Human name used in errors and logs.
    const ENTITY: &'static str;

    fn client(&self) -> &Self::Client;

    /// Identity of the row a view was built from.
    fn view_id(view: &Self::View) -> IdOf<Self>;

    /// Loads the relations of `rows`, preserving order.
    async fn expand(&self, rows: Vec<Self::Entity>) -> Result<Vec<Self::View>, StoreError>;

    async fn expand_one(&self, row: Self::Entity) -> Result<Self::View, StoreError> {
        let id = row.id().to_string();
        match self.expand(vec![row]).await?.pop() {
            Some(view) => Ok(view),
            None => Err(StoreError::Rejected(format!(
                "{} {id} vanished during load",
                Self::ENTITY
            ))),
        }
    }

    /// Every row in id order.
    async fn list_all(&self) -> Result<Vec<Self::View>, StoreError> {
        let rows = self.client().list().await?;
        debug!(entity = Self::ENTITY, count = rows.len(), "Listing");
        self.expand(rows).await
    }

    async fn get_by_id(&self, id: IdOf<Self>) -> Result<Self::View, StoreError> {
        match self.client().get(id.clone()).await? {
            Some(row) => self.expand_one(row).await,
            None => Err(StoreError::not_found(Self::ENTITY, id)),
        }
    }

    /// Inserts a row; the store assigns its identity.
    async fn create(&self, params: CreateOf<Self>) -> Result<Self::View, StoreError> {
        let row = self.client().create(params).await?;
        self.expand_one(row).await
    }

    /// Overwrites the entity's mutable fields. Everything else in the payload is ignored.
    async fn update(
        &self,
        id: IdOf<Self>,
        update: UpdateOf<Self>,
    ) -> Result<Self::View, StoreError> {
        let row = self.client().update(id, update).await?;
        self.expand_one(row).await
    }

    async fn delete(&self, id: IdOf<Self>) -> Result<(), StoreError> {
        self.client().delete(id).await
    }
}

/// The four services, cloned into every request handler.
#[derive(Clone)]
pub struct Services {
    pub customers: CustomerService,
    pub products: ProductService,
    pub orders: OrderService,
    pub order_items: OrderItemService,
}

impl Services {
    pub fn new(
        customers: CustomerClient,
        products: ProductClient,
        orders: OrderClient,
        order_items: OrderItemClient,
    ) -> Self {
        Self {
            customers: CustomerService::new(customers.clone()),
            products: ProductService::new(products.clone()),
            orders: OrderService::new(orders.clone(), customers, order_items.clone()),
            order_items: OrderItemService::new(order_items, products, orders),
        }
    }
}
