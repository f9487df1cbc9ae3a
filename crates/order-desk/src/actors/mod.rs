//! # Entity Stores
//!
//! [`ActorEntity`](resource_actor::ActorEntity) implementations for the four tables.
//!
//! Each impl decides which fields an update may overwrite and what a delete drags along
//! with it. Deletes cascade the way required foreign keys do in the relational schema:
//!
//! ```text
//! Customer ──► Order ──► OrderItem
//! Product  ──────────────► OrderItem
//! ```
//!
//! The cascade runs in `on_delete` through the client injected as the actor's context, so
//! the context graph mirrors the arrows above and stays acyclic.

mod customer;
mod order;
mod order_item;
mod product;

use crate::error::StoreError;

/// Treats a row that disappeared between the scan and the delete as already deleted.
fn ignore_missing(result: Result<(), StoreError>) -> Result<(), StoreError> {
    match result {
        Err(StoreError::NotFound { .. }) => Ok(()),
        other => other,
    }
}
