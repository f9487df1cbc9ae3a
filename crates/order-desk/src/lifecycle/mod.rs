//! # System Lifecycle
//!
//! Starting, wiring and stopping the four store actors.
//!
//! Actors are created first and given their dependencies when they start (`run(context)`).
//! The contexts follow the cascade arrows, so the dependency graph is acyclic:
//!
//! ```text
//! Customer actor ── OrderClient ──► Order actor ── OrderItemClient ──► OrderItem actor
//! Product actor  ───────────── OrderItemClient ──────────────────────► OrderItem actor
//! ```
//!
//! Shutdown drops every client the system owns. Each actor exits when its channel closes,
//! which drops the clients in its context and lets the next actor downstream exit too.
//! Anything else holding a client (a router, a [`Services`](crate::service::Services)
//! value) must be dropped first or shutdown waits for it.

pub mod order_system;

pub use order_system::*;
