//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the injected item store and app metadata
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use toolshop_infra::{InMemoryItemStore, ItemStore};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a freshly seeded in-memory store
/// (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_store(config, Arc::new(InMemoryItemStore::seeded()))
}

/// Build the router over a caller-supplied store.
pub fn build_app_with_store(config: &ApiConfig, store: Arc<dyn ItemStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store, config));

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
