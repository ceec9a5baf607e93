use dashmap::DashMap;
use std::time::{Duration, Instant};

// Sliding-window rate limiter keyed by client identifier. Each key holds the
// timestamps of its admitted requests within the trailing window; expired
// entries are pruned lazily on the request path, no background sweep.
pub struct RateLimiter {
    requests: DashMap<String, Vec<Instant>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: DashMap::new(),
            limit: limit as usize,
            window,
        }
    }

    // Admit or reject a single request for `client_id`. Rejection does not
    // record a timestamp, so blocked clients are not penalized further.
    // The DashMap entry guard serializes concurrent calls for the same key.
    pub fn admit(&self, client_id: &str) -> bool {
        let now = Instant::now();
        let mut timestamps = self.requests.entry(client_id.to_string()).or_default();

        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.limit {
            return false;
        }
        timestamps.push(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn admits_up_to_limit_then_rejects() {
        let limiter = RateLimiter::new(10, Duration::from_secs(60));
        for _ in 0..10 {
            assert!(limiter.admit("1.2.3.4"));
        }
        assert!(!limiter.admit("1.2.3.4"));
        assert!(!limiter.admit("1.2.3.4"));
    }

    #[test]
    fn clients_are_limited_independently() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.admit("a"));
        assert!(limiter.admit("a"));
        assert!(!limiter.admit("a"));
        assert!(limiter.admit("b"));
        assert!(limiter.admit("b"));
        assert!(!limiter.admit("b"));
    }

    #[test]
    fn window_slides_and_client_recovers() {
        let limiter = RateLimiter::new(2, Duration::from_millis(100));
        assert!(limiter.admit("c"));
        assert!(limiter.admit("c"));
        assert!(!limiter.admit("c"));

        sleep(Duration::from_millis(150));

        // burst aged out, full quota available again
        assert!(limiter.admit("c"));
        assert!(limiter.admit("c"));
        assert!(!limiter.admit("c"));
    }

    #[test]
    fn rejected_requests_do_not_consume_quota() {
        let limiter = RateLimiter::new(1, Duration::from_millis(100));
        assert!(limiter.admit("d"));
        assert!(!limiter.admit("d"));
        assert!(!limiter.admit("d"));

        sleep(Duration::from_millis(150));

        // only the admitted request occupied the window
        assert!(limiter.admit("d"));
    }

    #[test]
    fn concurrent_burst_admits_exactly_limit() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let limiter = Arc::new(RateLimiter::new(10, Duration::from_secs(60)));
        let admitted = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..40)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let admitted = Arc::clone(&admitted);
                std::thread::spawn(move || {
                    if limiter.admit("shared") {
                        admitted.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(admitted.load(Ordering::SeqCst), 10);
    }
}
