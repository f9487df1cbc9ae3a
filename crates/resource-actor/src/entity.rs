//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored record (Customer, Product, Order, …)
//! implements to be managed by the generic `ResourceActor`. It names the identity type, the
//! create and update payloads, the injected context and the error type, and provides the
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. `on_update` has no default: every entity decides which of its
//! fields a whole-record overwrite is allowed to touch.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any stored record must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors (for example to cascade a delete).
/// The `Context` is injected at `run()` time rather than at construction, which lets
/// actors that depend on each other be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identity. Ordered so listings come back in insertion order,
    /// and built from the actor's `i32` sequence.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<i32>;

    /// Payload accepted on create. Any identity it carries is ignored.
    type Create: Send + Sync + Debug;

    /// Payload accepted on update.
    type Update: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error type per entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identity of this record.
    fn id(&self) -> &Self::Id;

    /// Build the full record from the assigned id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed. A failure aborts the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
