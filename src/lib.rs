use axum::Router;
use axum::routing::get;
use std::sync::Arc;

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;

pub use rate_limit::RateLimiter;
pub use state::AppState;

// Build the router. Separate from main so integration tests can drive the
// real routes.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/v1/trending-topics", get(handlers::trending_topics_handler))
        .with_state(state)
}
