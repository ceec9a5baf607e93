use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

// Error taxonomy: validation errors and rate-limit rejections go back to the
// client as-is; internal failures are logged and answered with a generic body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid or missing time_range parameter")]
    InvalidTimeRange,

    #[error("min_mentions is not an integer")]
    InvalidMinMentions,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("malformed stored timestamp: {value:?}")]
    MalformedTimestamp { value: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidTimeRange | ApiError::InvalidMinMentions => StatusCode::BAD_REQUEST,
            ApiError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ApiError::MalformedTimestamp { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Message placed in the JSON body. Internal details never leave the
    // process.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidTimeRange => "Invalid time range or missing time range data",
            ApiError::InvalidMinMentions => "Invalid min_mentions value",
            ApiError::RateLimitExceeded => "Rate limit exceeded",
            ApiError::MalformedTimestamp { .. } => "An unexpected error occurred",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            error!("internal error: {}", self);
        }
        let body = Json(serde_json::json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}
