use std::sync::Arc;

use educa_config::{CookieConfig, CorsConfig, EmailConfig, JwtConfig, RateLimitConfig};
use sqlx::PgPool;

use crate::middleware::rate_limit::AuthRateLimiter;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cookie_config: CookieConfig,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
    /// `None` when rate limiting is disabled
    pub auth_rate_limiter: Option<Arc<AuthRateLimiter>>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        jwt_config: JwtConfig,
        cookie_config: CookieConfig,
        email_config: EmailConfig,
        cors_config: CorsConfig,
        rate_limit_config: &RateLimitConfig,
    ) -> Self {
        Self {
            db,
            jwt_config,
            cookie_config,
            email_config,
            cors_config,
            auth_rate_limiter: AuthRateLimiter::from_config(rate_limit_config).map(Arc::new),
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = educa_db::init_db_pool().await?;
    educa_db::run_migrations(&db).await?;

    Ok(AppState::new(
        db,
        JwtConfig::from_env(),
        CookieConfig::from_env(),
        EmailConfig::from_env(),
        CorsConfig::from_env(),
        &RateLimitConfig::from_env(),
    ))
}
