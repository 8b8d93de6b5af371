//! Per-client throttling of the authentication endpoints.

use std::fmt;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use educa_config::RateLimitConfig;
use educa_core::AppError;
use governor::{DefaultKeyedRateLimiter, RateLimiter};
use tracing::warn;

use crate::state::AppState;

pub struct AuthRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
}

impl AuthRateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            limiter: RateLimiter::keyed(config.auth_quota()),
        }
    }

    /// `None` when throttling is switched off.
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        config.enabled.then(|| Self::new(config))
    }

    pub fn check(&self, key: &str) -> Result<(), AppError> {
        self.limiter.check_key(&key.to_string()).map_err(|_| {
            AppError::too_many_requests("Too many requests, please try again later".to_string())
        })?;

        if self.limiter.len() > 10_000 {
            self.limiter.retain_recent();
        }

        Ok(())
    }
}

impl fmt::Debug for AuthRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRateLimiter")
            .field("tracked_clients", &self.limiter.len())
            .finish()
    }
}

/// Peer IP of the connection. Client-supplied headers such as
/// `X-Forwarded-For` are ignored.
pub fn client_key(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn auth_rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if let Some(limiter) = &state.auth_rate_limiter {
        let key = client_key(&req);
        if let Err(e) = limiter.check(&key) {
            warn!(client = %key, path = %req.uri().path(), "Rate limit exceeded");
            return e.into_response();
        }
    }

    next.run(req).await
}
