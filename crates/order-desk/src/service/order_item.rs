use super::ResourceService;
use crate::clients::{OrderClient, OrderItemClient, ProductClient};
use crate::error::StoreError;
use crate::model::{Order, OrderId, OrderItem, OrderItemId, Product, ProductId};
use async_trait::async_trait;
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An order line with its product and its order header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemView {
    #[serde(flatten)]
    pub item: OrderItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[derive(Clone)]
pub struct OrderItemService {
    order_items: OrderItemClient,
    products: ProductClient,
    orders: OrderClient,
}

impl OrderItemService {
    pub fn new(order_items: OrderItemClient, products: ProductClient, orders: OrderClient) -> Self {
        Self {
            order_items,
            products,
            orders,
        }
    }
}

#[async_trait]
impl ResourceService for OrderItemService {
    type Entity = OrderItem;
    type Client = OrderItemClient;
    type View = OrderItemView;

    const COLLECTION: &'static str = "orderitems";
    const ENTITY: &'static str = "OrderItem";

    fn client(&self) -> &OrderItemClient {
        &self.order_items
    }

    fn view_id(view: &OrderItemView) -> OrderItemId {
        view.item.id
    }

    async fn expand(&self, rows: Vec<OrderItem>) -> Result<Vec<OrderItemView>, StoreError> {
        let mut products: BTreeMap<ProductId, Option<Product>> = BTreeMap::new();
        let mut orders: BTreeMap<OrderId, Option<Order>> = BTreeMap::new();
        for item in &rows {
            if !products.contains_key(&item.product_id) {
                let product = self.products.get(item.product_id).await?;
                products.insert(item.product_id, product);
            }
            if !orders.contains_key(&item.order_id) {
                let order = self.orders.get(item.order_id).await?;
                orders.insert(item.order_id, order);
            }
        }

        Ok(rows
            .into_iter()
            .map(|item| OrderItemView {
                product: products.get(&item.product_id).cloned().flatten(),
                order: orders.get(&item.order_id).cloned().flatten(),
                item,
            })
            .collect())
    }
}
