use axum::Json;
use axum::extract::{ConnectInfo, Query, State};
use chrono::Local;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::filter::{TimeRange, filter_topics};
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{TrendingQuery, TrendingResponse};
use crate::state::AppState;

// GET /api/v1/trending-topics
//
// Rate-limit guard runs first, so an over-quota client gets 429 even when
// its parameters are invalid. Validation happens before any filtering.
pub async fn trending_topics_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<TrendingQuery>,
) -> Result<Json<TrendingResponse>, ApiError> {
    REQUEST_TOTAL.inc();
    let start = Instant::now();

    let client_ip = addr.ip().to_string();
    if !state.rate_limiter.admit(&client_ip) {
        RATE_LIMITED_TOTAL.inc();
        warn!(client = %client_ip, "rate limit exceeded");
        return Err(ApiError::RateLimitExceeded);
    }

    let time_range = params
        .time_range
        .as_deref()
        .and_then(TimeRange::parse)
        .ok_or(ApiError::InvalidTimeRange)?;

    // Empty string behaves as absent, same as a missing parameter
    let min_mentions = match params.min_mentions.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(raw.parse::<u64>().map_err(|_| ApiError::InvalidMinMentions)?),
        None => None,
    };

    let now = Local::now().naive_local();
    let records = filter_topics(
        &state.dataset,
        now,
        time_range,
        params.topic.as_deref(),
        min_mentions,
    )?;

    info!(
        client = %client_ip,
        time_range = time_range.as_str(),
        topic = params.topic.as_deref().unwrap_or(""),
        min_mentions = ?min_mentions,
        results = records.len(),
        "request processed"
    );
    REQUEST_LATENCY.observe(start.elapsed().as_secs_f64());

    Ok(Json(TrendingResponse {
        trending_topics: records,
    }))
}
