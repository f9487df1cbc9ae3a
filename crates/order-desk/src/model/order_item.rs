use crate::model::{OrderId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for OrderItems.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderItemId(pub i32);

impl From<i32> for OrderItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order: a product and a quantity.
///
/// The referenced order and product are not checked when the line is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "orderItemID")]
    pub id: OrderItemId,
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Payload for creating an order line. Missing fields default to `0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    #[serde(rename = "orderID", default)]
    pub order_id: OrderId,
    #[serde(rename = "productID", default)]
    pub product_id: ProductId,
    #[serde(default)]
    pub quantity: i32,
}

/// Payload for updating an order line. Only the quantity is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    #[serde(default)]
    pub quantity: i32,
}
