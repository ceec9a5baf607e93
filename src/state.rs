use crate::models::TrendingRecord;
use crate::rate_limit::RateLimiter;

// App's shared state. The dataset is fixed at startup and only ever read;
// the rate limiter is the single piece of mutable shared state.
pub struct AppState {
    pub dataset: Vec<TrendingRecord>,
    pub rate_limiter: RateLimiter,
}
