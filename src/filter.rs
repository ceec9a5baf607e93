use chrono::{Duration, NaiveDateTime};

use crate::error::ApiError;
use crate::models::TrendingRecord;

// Supported recency windows. Anything outside this set is a validation
// error, not a filter-to-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    ThirtyMinutes,
    OneHour,
    FiveHours,
    TwelveHours,
    OneDay,
    SevenDays,
}

impl TimeRange {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "30m" => Some(TimeRange::ThirtyMinutes),
            "1h" => Some(TimeRange::OneHour),
            "5h" => Some(TimeRange::FiveHours),
            "12h" => Some(TimeRange::TwelveHours),
            "1d" => Some(TimeRange::OneDay),
            "7d" => Some(TimeRange::SevenDays),
            _ => None,
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            TimeRange::ThirtyMinutes => Duration::minutes(30),
            TimeRange::OneHour => Duration::hours(1),
            TimeRange::FiveHours => Duration::hours(5),
            TimeRange::TwelveHours => Duration::hours(12),
            TimeRange::OneDay => Duration::days(1),
            TimeRange::SevenDays => Duration::days(7),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::ThirtyMinutes => "30m",
            TimeRange::OneHour => "1h",
            TimeRange::FiveHours => "5h",
            TimeRange::TwelveHours => "12h",
            TimeRange::OneDay => "1d",
            TimeRange::SevenDays => "7d",
        }
    }
}

// Narrow the dataset by recency, then topic substring, then minimum
// mentions. Pure function: `now` is passed in so callers (and tests) control
// the reference time. Preserves dataset order and never mutates the source.
//
// A record whose stored timestamp does not parse fails the whole request,
// keeping results reproducible instead of silently thinning them.
pub fn filter_topics(
    dataset: &[TrendingRecord],
    now: NaiveDateTime,
    time_range: TimeRange,
    topic_substring: Option<&str>,
    min_mentions: Option<u64>,
) -> Result<Vec<TrendingRecord>, ApiError> {
    let boundary = now - time_range.duration();

    let mut results = Vec::new();
    for rec in dataset {
        if rec.parsed_timestamp()? >= boundary {
            results.push(rec.clone());
        }
    }

    if let Some(needle) = topic_substring.filter(|s| !s.is_empty()) {
        let needle = needle.to_lowercase();
        results.retain(|rec| rec.topic.to_lowercase().contains(&needle));
    }

    if let Some(min) = min_mentions {
        results.retain(|rec| rec.mentions >= min);
    }

    Ok(results)
}
