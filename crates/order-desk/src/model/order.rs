use crate::model::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status given to orders that do not name one.
pub const DEFAULT_STATUS: &str = "Pending";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Store-assigned identifier for Orders.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order header. Its lines are [`OrderItem`](crate::model::OrderItem)s pointing back at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderID")]
    pub id: OrderId,
    #[serde(rename = "customerID")]
    pub customer_id: CustomerId,
    #[serde(rename = "orderDate")]
    pub order_date: DateTime<Utc>,
    pub status: String,
}

/// Payload for creating an order.
///
/// Nothing is required: the customer defaults to `0`, the date to the time of insertion
/// and the status to [`DEFAULT_STATUS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "customerID", default)]
    pub customer_id: CustomerId,
    #[serde(
        rename = "orderDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Payload for updating an order. Only the status is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default = "default_status")]
    pub status: String,
}
