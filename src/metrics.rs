use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "trending_requests_total",
        "Total number of trending-topics requests"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "trending_rate_limited_total",
        "Total requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "trending_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}
