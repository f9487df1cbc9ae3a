//! # HTTP Surface
//!
//! `/api/{customers,products,orders,orderitems}` plus `/health` and `/docs`.
//!
//! | Outcome | Status |
//! |---|---|
//! | list / fetch / update | 200 |
//! | create | 201 with `Location` |
//! | delete | 204 |
//! | unknown id | 404, empty body |
//! | body or path id that does not parse | 400 |
//! | store failure | 500 |
//!
//! Any origin, method and header is allowed cross-origin.

mod docs;
mod error;
mod handlers;
mod health;
mod payload;

pub use docs::{RouteCatalog, RouteEntry};
pub use error::AppError;
pub use handlers::resource_routes;
pub use health::Health;

use crate::service::Services;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the full application router over `services`.
pub fn router(services: Services) -> Router {
    let mut catalog = RouteCatalog::default();
    let api = Router::new()
        .merge(resource_routes(services.customers, &mut catalog))
        .merge(resource_routes(services.products, &mut catalog))
        .merge(resource_routes(services.orders, &mut catalog))
        .merge(resource_routes(services.order_items, &mut catalog));

    catalog.add("GET", "/health", "Liveness probe with server time");
    catalog.add("GET", "/docs", "This route listing");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/docs", get(docs::docs_handler))
        .with_state(Arc::new(catalog))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
