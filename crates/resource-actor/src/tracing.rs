//! # Tracing Setup
//!
//! One-call initialisation of the `tracing` subscriber shared by every binary.
//!
//! Actors log with an `entity_type` field instead of module paths, so targets are hidden:
//!
//! ```text
//! INFO Created entity_type="Order" id=3 size=3
//! WARN Not found entity_type="Customer" id=9
//! ```

use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"`) applies.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
