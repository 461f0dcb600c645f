//! Sliding-window request limiter keyed by client identifier.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_MAX_REQUESTS: usize = 5;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    admitted: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        RateLimiter {
            max_requests: max_requests.max(1),
            window,
            admitted: Mutex::new(HashMap::new()),
        }
    }

    /// Admits and records a request, or returns `false` when `client` already
    /// used up its window. Rejected requests are not recorded.
    pub async fn check(&self, client: &str, now: Instant) -> bool {
        let mut admitted = self.admitted.lock().await;
        let entries = admitted.entry(client.to_string()).or_default();
        while entries
            .front()
            .is_some_and(|at| now.saturating_duration_since(*at) >= self.window)
        {
            entries.pop_front();
        }
        if entries.len() >= self.max_requests {
            warn!(client, limit = self.max_requests, "Rate limit exceeded");
            return false;
        }
        entries.push_back(now);
        debug!(client, used = entries.len(), "Admitted contact request");
        true
    }

    /// Drops clients whose whole history has aged out.
    pub async fn prune(&self, now: Instant) -> usize {
        let mut admitted = self.admitted.lock().await;
        let before = admitted.len();
        admitted.retain(|_, entries| {
            entries
                .back()
                .is_some_and(|at| now.saturating_duration_since(*at) < self.window)
        });
        before - admitted.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        RateLimiter::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sixth_request_in_window_is_rejected() {
        let limiter = RateLimiter::default();
        let t0 = Instant::now();
        for i in 0..5 {
            assert!(limiter.check("10.0.0.1", t0 + Duration::from_secs(i)).await);
        }
        assert!(!limiter.check("10.0.0.1", t0 + Duration::from_secs(10)).await);
        assert!(limiter.check("10.0.0.2", t0 + Duration::from_secs(10)).await);
    }

    #[tokio::test]
    async fn window_slides_per_request() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        let t0 = Instant::now();
        assert!(limiter.check("a", t0).await);
        assert!(limiter.check("a", t0 + Duration::from_secs(30)).await);
        assert!(!limiter.check("a", t0 + Duration::from_secs(59)).await);
        // The first admission ages out; the second still counts.
        assert!(limiter.check("a", t0 + Duration::from_secs(60)).await);
        assert!(!limiter.check("a", t0 + Duration::from_secs(61)).await);
    }

    #[tokio::test]
    async fn prune_forgets_idle_clients() {
        let limiter = RateLimiter::new(1, Duration::from_secs(10));
        let t0 = Instant::now();
        limiter.check("idle", t0).await;
        limiter.check("busy", t0 + Duration::from_secs(8)).await;
        assert_eq!(limiter.prune(t0 + Duration::from_secs(12)).await, 1);
        assert!(!limiter.check("busy", t0 + Duration::from_secs(12)).await);
    }
}
