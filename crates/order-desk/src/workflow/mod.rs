//! # Order Composition
//!
//! Turns one customer and a list of (product, quantity) lines into an order header plus
//! one order line per entry, using two kinds of dependent calls against an [`OrderApi`].
//!
//! The sequence is not transactional. The header is created first; the lines follow one
//! by one and a line that fails is logged and skipped, leaving the order short. Nothing
//! is retried or rolled back.

mod local;
mod remote;

pub use local::LocalOrderApi;
pub use remote::HttpOrderApi;

use crate::error::StoreError;
use crate::model::{
    CustomerId, Order, OrderCreate, OrderItem, OrderItemCreate, ProductId, DEFAULT_STATUS,
};
use async_trait::async_trait;
use chrono::Utc;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// The two writes composition needs.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderApiError>;

    async fn create_order_item(&self, params: OrderItemCreate)
        -> Result<OrderItem, OrderApiError>;
}

#[derive(Debug, Error)]
pub enum OrderApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum CompositionError {
    #[error("Add at least one product with a positive quantity")]
    NoItems,

    #[error("Order could not be created: {0}")]
    OrderRejected(#[source] OrderApiError),
}

/// One requested product and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected PRODUCT:QUANTITY, got {0:?}")]
pub struct ParseLineError(String);

impl FromStr for OrderLine {
    type Err = ParseLineError;

    /// Parses `"<product id>:<quantity>"`, e.g. `"4:2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLineError(s.to_string());
        let (product, quantity) = s.split_once(':').ok_or_else(err)?;
        Ok(Self {
            product_id: ProductId(product.trim().parse().map_err(|_| err())?),
            quantity: quantity.trim().parse().map_err(|_| err())?,
        })
    }
}

/// Everything the user picked before submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
}

impl OrderDraft {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, product_id: ProductId, quantity: i32) -> Self {
        self.lines.push(OrderLine {
            product_id,
            quantity,
        });
        self
    }
}

/// Places `draft` through `api` and returns the order header.
///
/// Lines with a non-positive quantity or no product (id `0`) are dropped first; if none
/// remain, no call is made. A failed header aborts with [`CompositionError::OrderRejected`].
/// Failed lines are logged and otherwise ignored, so `Ok` only means the header exists.
#[instrument(skip(api, draft), fields(customer = %draft.customer_id))]
pub async fn compose_order<A>(api: &A, draft: OrderDraft) -> Result<Order, CompositionError>
where
    A: OrderApi + ?Sized,
{
    let lines: Vec<OrderLine> = draft
        .lines
        .into_iter()
        .filter(|line| line.quantity > 0 && line.product_id != ProductId(0))
        .collect();
    if lines.is_empty() {
        warn!("Order has no lines, nothing sent");
        return Err(CompositionError::NoItems);
    }

    let order = api
        .create_order(OrderCreate {
            customer_id: draft.customer_id,
            order_date: Some(Utc::now()),
            status: DEFAULT_STATUS.to_string(),
        })
        .await
        .map_err(CompositionError::OrderRejected)?;
    info!(order = %order.id, lines = lines.len(), "Order created, adding lines");

    let mut failed = 0usize;
    for line in &lines {
        let params = OrderItemCreate {
            order_id: order.id,
            product_id: line.product_id,
            quantity: line.quantity,
        };
        if let Err(e) = api.create_order_item(params).await {
            failed += 1;
            warn!(
                order = %order.id,
                product = %line.product_id,
                error = %e,
                "Order line not created"
            );
        }
    }

    info!(order = %order.id, lines = lines.len(), failed, "Order placed");
    Ok(order)
}
