use crate::clients::{
    customer_store, order_item_store, order_store, product_store, CustomerClient, OrderClient,
    OrderItemClient, ProductClient,
};
use crate::service::Services;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Channel capacity used by [`OrderSystem::new`].
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// Runtime orchestrator for the four stores.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let app = order_desk::http::router(system.services());
/// // ... serve until done, then drop `app` ...
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub order_item_client: OrderItemClient,

    /// Task handles for all running actors, upstream first.
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor with [`DEFAULT_CHANNEL_BUFFER`].
    pub fn new() -> Self {
        Self::with_buffer(DEFAULT_CHANNEL_BUFFER)
    }

    /// Starts every actor with request channels of `buffer` slots.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is 0; [`ServerConfig::load`](crate::config::ServerConfig::load)
    /// refuses that value.
    pub fn with_buffer(buffer: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (customer_actor, customer_client) = customer_store(buffer);
        let (product_actor, product_client) = product_store(buffer);
        let (order_actor, order_client) = order_store(buffer);
        let (order_item_actor, order_item_client) = order_item_store(buffer);

        // 2. Start actors with injected context
        let customer_handle = tokio::spawn(customer_actor.run(order_client.clone()));
        let product_handle = tokio::spawn(product_actor.run(order_item_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(order_item_client.clone()));
        let order_item_handle = tokio::spawn(order_item_actor.run(()));

        info!(buffer, "Order system started");

        Self {
            customer_client,
            product_client,
            order_client,
            order_item_client,
            handles: vec![
                customer_handle,
                product_handle,
                order_handle,
                order_item_handle,
            ],
        }
    }

    /// Services sharing this system's stores.
    pub fn services(&self) -> Services {
        Services::new(
            self.customer_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
            self.order_item_client.clone(),
        )
    }

    /// Drops the system's clients and waits for every actor to finish.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);
        drop(self.order_item_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
