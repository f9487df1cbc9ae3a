use super::ResourceService;
use crate::clients::{CustomerClient, OrderClient, OrderItemClient};
use crate::error::StoreError;
use crate::model::{Customer, CustomerId, Order, OrderId, OrderItem};
use async_trait::async_trait;
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An order with its customer and its lines.
///
/// The nested customer carries no orders and the nested lines carry neither their order
/// nor their product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(rename = "orderItems", default)]
    pub order_items: Vec<OrderItem>,
}

#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    customers: CustomerClient,
    order_items: OrderItemClient,
}

impl OrderService {
    pub fn new(
        orders: OrderClient,
        customers: CustomerClient,
        order_items: OrderItemClient,
    ) -> Self {
        Self {
            orders,
            customers,
            order_items,
        }
    }
}

#[async_trait]
impl ResourceService for OrderService {
    type Entity = Order;
    type Client = OrderClient;
    type View = OrderView;

    const COLLECTION: &'static str = "orders";
    const ENTITY: &'static str = "Order";

    fn client(&self) -> &OrderClient {
        &self.orders
    }

    fn view_id(view: &OrderView) -> OrderId {
        view.order.id
    }

    async fn expand(&self, rows: Vec<Order>) -> Result<Vec<OrderView>, StoreError> {
        let mut customers: BTreeMap<CustomerId, Option<Customer>> = BTreeMap::new();
        for order in &rows {
            if !customers.contains_key(&order.customer_id) {
                let customer = self.customers.get(order.customer_id).await?;
                customers.insert(order.customer_id, customer);
            }
        }

        let mut lines: BTreeMap<OrderId, Vec<OrderItem>> = BTreeMap::new();
        for item in self.order_items.list().await? {
            lines.entry(item.order_id).or_default().push(item);
        }

        Ok(rows
            .into_iter()
            .map(|order| OrderView {
                customer: customers.get(&order.customer_id).cloned().flatten(),
                order_items: lines.remove(&order.id).unwrap_or_default(),
                order,
            })
            .collect())
    }
}
