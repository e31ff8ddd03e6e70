use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod capabilities;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod registry;
pub mod rpc;

use registry::Registry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/rpc", post(http::handlers::rpc_endpoint))
        .route("/health", get(http::handlers::health))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
