//! Canary API: the public web surface
//!
//! Thin axum layer over `canary-store` and `canary-core`: publisher pages as
//! JSON, the status badge endpoint, site stats, health, and metrics.
pub mod badges;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use canary_store::MemoryStore;
use tower_http::trace::TraceLayer;

use crate::metrics::Metrics;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(store: MemoryStore) -> Result<Self, prometheus::Error> {
        Ok(Self {
            store: Arc::new(store),
            metrics: Arc::new(Metrics::new()?),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        .route("/publishers", get(handlers::publishers))
        .route("/publisher/{publisher_id}", get(handlers::publisher))
        .route("/publisher/badge/{filename}", get(handlers::publisher_badge))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str, store: MemoryStore) {
    let state = AppState::new(store).expect("Failed to build metrics registry");
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Canary API listening on {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
