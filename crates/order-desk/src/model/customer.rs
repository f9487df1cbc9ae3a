use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for Customers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CustomerId(pub i32);

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer who places orders.
///
/// See [`impl ActorEntity for Customer`](#impl-ActorEntity-for-Customer) for how it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customerID")]
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for creating a customer. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for updating a customer: all contact fields are overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}
