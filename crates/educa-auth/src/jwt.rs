//! Access and refresh token creation and verification.
//!
//! Both token kinds are HS256 JWTs, but each is signed with its own secret
//! from [`JwtConfig`], so a refresh token never verifies as an access token
//! and vice versa.
//!
//! ```ignore
//! use educa_auth::{create_access_token, verify_token};
//! use educa_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "user@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use educa_config::JwtConfig;
use educa_core::AppError;

use crate::claims::{Claims, RefreshTokenClaims};

/// `(iat, exp)` for a token living `lifetime` seconds from now.
fn issued_window(lifetime: i64) -> Result<(usize, usize), AppError> {
    let now = usize::try_from(Utc::now().timestamp())
        .map_err(|_| AppError::internal_error("System clock is before the epoch".to_string()))?;
    let exp = usize::try_from(lifetime)
        .ok()
        .filter(|secs| *secs > 0)
        .and_then(|secs| now.checked_add(secs))
        .ok_or_else(|| {
            AppError::internal_error(format!("Invalid token lifetime: {} seconds", lifetime))
        })?;
    Ok((now, exp))
}

/// Issues an access token for `user_id`, valid for `access_token_expiry` seconds.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let (now, exp) = issued_window(jwt_config.access_token_expiry)?;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.access_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token's signature and expiry.
///
/// # Errors
///
/// Returns 401 "Invalid or expired token" for any bad token.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.access_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

pub fn create_refresh_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let (now, exp) = issued_window(jwt_config.refresh_token_expiry)?;

    let claims = RefreshTokenClaims {
        sub: user_id.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create refresh token: {}", e)))
}

pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, AppError> {
    decode::<RefreshTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired refresh token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            access_secret: "test-access-secret-at-least-32-characters".to_string(),
            refresh_secret: "test-refresh-secret-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 604800,
        }
    }

    #[test]
    fn test_create_and_verify_access_token() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, "test@example.com", &config).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid.token.here", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), "test@example.com", &config).unwrap();

        let other = JwtConfig {
            access_secret: "a-completely-different-access-secret-value".to_string(),
            ..config
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.access_secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_non_positive_lifetime_is_rejected() {
        let negative = JwtConfig {
            access_token_expiry: -1,
            refresh_token_expiry: 0,
            ..get_test_jwt_config()
        };

        let err = create_access_token(Uuid::new_v4(), "test@example.com", &negative).unwrap_err();
        assert_eq!(err.status.as_u16(), 500);
        assert!(create_refresh_token(Uuid::new_v4(), &negative).is_err());
    }

    #[test]
    fn test_create_and_verify_refresh_token() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_refresh_token(user_id, &config).unwrap();
        let claims = verify_refresh_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 604800);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let first = create_refresh_token(user_id, &config).unwrap();
        let second = create_refresh_token(user_id, &config).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let refresh = create_refresh_token(user_id, &config).unwrap();
        assert!(verify_token(&refresh, &config).is_err());

        let access = create_access_token(user_id, "test@example.com", &config).unwrap();
        assert!(verify_refresh_token(&access, &config).is_err());
    }
}
