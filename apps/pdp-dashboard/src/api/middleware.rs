//! Request budget for the dashboard.
//!
//! One budget is shared by every client: pages, JSON and PDP images all draw
//! from it. `PDP_RATE_LIMIT` sets requests per second (100 when unset, 0
//! turns the limiter off).

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Default rate limit in requests per second.
const DEFAULT_RPS: u32 = 100;

// =============================================================================
// RATE LIMITER
// =============================================================================

/// Budget shared by all routes. Unkeyed, so clients are not told apart.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Budget of `requests_per_second`. Zero falls back to 100.
pub fn create_rate_limiter(requests_per_second: u32) -> GlobalRateLimiter {
    let rps = NonZeroU32::new(requests_per_second)
        .or(NonZeroU32::new(DEFAULT_RPS))
        .unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(Quota::per_second(rps)))
}

/// `PDP_RATE_LIMIT`, or 100 if unset or unparsable.
pub fn get_rate_limit_from_env() -> u32 {
    std::env::var("PDP_RATE_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RPS)
}

/// Answer 429 once the second's budget is spent.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    match limiter.check() {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
            Err((StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rate_limiter() {
        let limiter = create_rate_limiter(50);
        assert!(limiter.check().is_ok());
    }

    #[test]
    fn test_create_rate_limiter_zero_defaults() {
        let limiter = create_rate_limiter(0);
        assert!(limiter.check().is_ok());
    }

    #[test]
    fn test_limiter_exhausts_burst() {
        let limiter = create_rate_limiter(2);
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
