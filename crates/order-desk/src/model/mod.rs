//! # Domain Model
//!
//! Plain records for the four tables and the payloads that create and update them.
//! Field names on the wire are camelCase with the `ID` suffix kept (`customerID`,
//! `orderDate`); identity fields sent by clients on create are ignored.

pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;

pub use customer::*;
pub use order::*;
pub use order_item::*;
pub use product::*;
