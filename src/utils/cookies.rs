//! The refresh token cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};
use educa_config::{CookieConfig, REFRESH_TOKEN_COOKIE};
use time::Duration;

pub fn refresh_cookie(token: &str, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((REFRESH_TOKEN_COOKIE, token.to_string()))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::seconds(config.max_age))
        .secure(config.secure)
        .build()
}

/// Expires the refresh cookie on the client.
pub fn clear_refresh_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = refresh_cookie("", config);
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = refresh_cookie("abc", &CookieConfig::default());
        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
        assert_eq!(cookie.secure(), Some(false));

        let header = cookie.to_string();
        assert!(header.starts_with("refreshToken=abc;"));
        assert!(header.contains("Max-Age=604800"));
        assert!(!header.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_in_production() {
        let config = CookieConfig {
            secure: true,
            ..CookieConfig::default()
        };
        let cookie = refresh_cookie("abc", &config);
        assert_eq!(cookie.secure(), Some(true));
        assert!(cookie.to_string().contains("; Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_refresh_cookie(&CookieConfig::default());
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/"));

        let header = cookie.to_string();
        assert!(header.starts_with("refreshToken=;"));
        assert!(header.contains("Max-Age=0"));
    }
}
