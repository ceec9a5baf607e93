mod health;
mod metrics;
mod trending;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use trending::trending_topics_handler;
