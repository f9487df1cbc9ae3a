//! # Order Desk
//!
//! A small order-management backend: customers, products, orders and order lines behind a
//! REST API, plus the client-side workflow that composes an order from several requests.
//!
//! ## Core Components
//!
//! - **[model]**: the four records and their create/update payloads
//! - **[actors]**: how each record is stored, updated and cascaded on delete
//! - **[clients]**: typed store clients (e.g. [`OrderClient`](clients::OrderClient))
//! - **[service]**: one generic [`ResourceService`](service::ResourceService) with eager loading
//! - **[http]**: the axum router
//! - **[workflow]**: order composition over HTTP or in-process
//! - **[lifecycle]**: starting and stopping the stores
//!
//! Stores are in-process actors from the `resource-actor` crate; nothing is persisted
//! across restarts.

pub mod actors;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod server;
pub mod service;
pub mod workflow;
