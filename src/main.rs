use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trending_topics::config::Args;
use trending_topics::{AppState, RateLimiter, app, dataset};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let state = Arc::new(AppState {
        dataset: dataset::mock_dataset(),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
    });

    let router = app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("trending topics service on http://localhost:{}", args.port);
    info!(
        "rate limit: {} requests per {} seconds per client",
        args.rate_limit, args.rate_window
    );

    // connect-info keying: the rate limiter needs the client address
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
