use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// Stored timestamp format, e.g. "2025-01-03 21:30:00"
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// One entry of the mock dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRecord {
    pub topic: String,
    pub platform: String,
    pub mentions: u64,
    pub shares: u64,
    pub likes: u64,
    pub timestamp: String, // kept as the original string, parsed on demand
}

impl TrendingRecord {
    // Parse the stored timestamp. A record that fails here is a data error
    // and fails the whole request.
    pub fn parsed_timestamp(&self) -> Result<NaiveDateTime, ApiError> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).map_err(|_| {
            ApiError::MalformedTimestamp {
                value: self.timestamp.clone(),
            }
        })
    }
}

// Query parameters for /api/v1/trending-topics. Everything arrives as an
// optional string so validation stays in our hands (and produces our own
// error bodies instead of the extractor's).
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub time_range: Option<String>,
    pub topic: Option<String>,
    pub min_mentions: Option<String>,
}

// Success response envelope
#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub trending_topics: Vec<TrendingRecord>,
}
