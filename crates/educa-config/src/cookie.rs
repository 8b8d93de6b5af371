use std::env;

pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Attributes of the refresh token cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    /// Send the cookie over HTTPS only
    pub secure: bool,
    /// Cookie lifetime in seconds
    pub max_age: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: false,
            max_age: 604_800, // 7 days
        }
    }
}

impl CookieConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secure: env::var("APP_ENV")
                .map(|v| is_production(&v))
                .unwrap_or(defaults.secure),
            max_age: env::var("REFRESH_COOKIE_MAX_AGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_age),
        }
    }
}

fn is_production(app_env: &str) -> bool {
    app_env.trim().eq_ignore_ascii_case("production")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_insecure_seven_days() {
        let config = CookieConfig::default();
        assert!(!config.secure);
        assert_eq!(config.max_age, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_is_production() {
        assert!(is_production("production"));
        assert!(is_production("Production "));
        assert!(!is_production("development"));
        assert!(!is_production(""));
    }
}
