use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for every endpoint the API serves.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/info", get(system::info))
        .merge(items::router())
}
