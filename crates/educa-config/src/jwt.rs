use std::env;

const DEFAULT_ACCESS_EXPIRY: i64 = 2_592_000; // 30 days
const DEFAULT_REFRESH_EXPIRY: i64 = 5_184_000; // 60 days

/// Signing secrets and lifetimes for access and refresh tokens.
///
/// Access and refresh tokens are signed with different secrets so a leaked
/// refresh token cannot be replayed as a bearer token.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            access_secret: env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or_else(|_| "access-secret-change-in-production".to_string()),
            refresh_secret: env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or_else(|_| "refresh-secret-change-in-production".to_string()),
            access_token_expiry: parse_expiry(
                env::var("JWT_ACCESS_EXPIRY").ok().as_deref(),
                DEFAULT_ACCESS_EXPIRY,
            ),
            refresh_token_expiry: parse_expiry(
                env::var("JWT_REFRESH_EXPIRY").ok().as_deref(),
                DEFAULT_REFRESH_EXPIRY,
            ),
        }
    }
}

/// Lifetime in seconds; missing, unparseable or non-positive values fall
/// back to `default`.
fn parse_expiry(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
