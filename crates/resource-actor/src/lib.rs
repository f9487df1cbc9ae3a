//! # Resource Actor
//!
//! Building blocks for in-process entity stores: one Tokio task per table, a typed message
//! protocol, and a cheap cloneable client. It follows the
//! [actors with Tokio](https://ryhl.io/blog/actors-with-tokio/) pattern.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the record type, its payloads and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]): owns the rows and processes requests in order
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed request/reply calls
//!
//! Each table gets its own actor with isolated state. When one table's lifecycle touches
//! another (a delete that cascades, say), the entity hook calls the other table's client,
//! which it received as its `Context` when the actor was started.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at `run()` time, not at construction:
//!
//! ```rust,ignore
//! let (parent_actor, parent_client) = ResourceActor::<Parent>::new(32);
//! let (child_actor, child_client) = ResourceActor::<Child>::new(32);
//!
//! tokio::spawn(child_actor.run(()));
//! // deleting a Parent can now reach the Child table
//! tokio::spawn(parent_actor.run(child_client.clone()));
//! ```
//!
//! Shutdown is implicit: when every client of an actor is dropped its loop ends, which in
//! turn drops the clients held in its context. That only terminates if the dependency
//! graph is acyclic.
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, a scripted stand-in for any store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
