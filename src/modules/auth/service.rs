use std::sync::LazyLock;

use anyhow::anyhow;
use chrono::Utc;
use educa_auth::{
    create_access_token, create_refresh_token, generate_reset_token, hash_reset_token,
    verify_refresh_token,
};
use educa_config::{EmailConfig, JwtConfig};
use educa_core::{AppError, hash_password, verify_password};
use educa_models::{
    CreateUserDto, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
    UserId,
};
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use crate::modules::users::service::UserService;
use crate::utils::email::EmailService;

/// Access token for the response body plus the refresh token for the cookie.
#[derive(Debug)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Compared against when the email is unknown, so both login failures pay
/// the same bcrypt cost.
static DUMMY_PASSWORD_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("educa-dummy-password").ok());

fn verify_against_dummy(password: &str) -> bool {
    DUMMY_PASSWORD_HASH
        .as_deref()
        .and_then(|hash| verify_password(password, hash).ok())
        .unwrap_or(false)
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password".to_string())
}

fn issue_tokens(user_id: UserId, email: &str, jwt: &JwtConfig) -> Result<IssuedTokens, AppError> {
    Ok(IssuedTokens {
        access_token: create_access_token(user_id.into_inner(), email, jwt)?,
        refresh_token: create_refresh_token(user_id.into_inner(), jwt)?,
    })
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt), fields(email = %dto.email))]
    pub async fn signup(
        db: &PgPool,
        dto: SignupRequest,
        jwt: &JwtConfig,
    ) -> Result<IssuedTokens, AppError> {
        let user = UserService::create_user(
            db,
            CreateUserDto {
                username: dto.username,
                email: dto.email,
                password: dto.password,
            },
        )
        .await?;

        info!(user_id = %user.id, "User signed up");
        issue_tokens(user.id, &user.email, jwt)
    }

    #[instrument(skip(db, dto, jwt), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt: &JwtConfig,
    ) -> Result<IssuedTokens, AppError> {
        let Some(credentials) = UserService::find_credentials_by_email(db, &dto.email).await?
        else {
            verify_against_dummy(&dto.password);
            return Err(invalid_credentials());
        };

        if !verify_password(&dto.password, &credentials.password)? {
            warn!(user_id = %credentials.id, "Login rejected: wrong password");
            return Err(invalid_credentials());
        }

        issue_tokens(credentials.id, &credentials.email, jwt)
    }

    /// Exchanges a refresh token for a new token pair.
    #[instrument(skip_all)]
    pub async fn refresh(
        db: &PgPool,
        refresh_token: &str,
        jwt: &JwtConfig,
    ) -> Result<IssuedTokens, AppError> {
        let claims = verify_refresh_token(refresh_token, jwt)?;
        let user_id = claims
            .user_id()
            .map(UserId::from)
            .ok_or_else(|| AppError::unauthorized("Invalid or expired refresh token".to_string()))?;

        let user = UserService::get_user(db, user_id).await.map_err(|e| {
            if e.status.is_client_error() {
                AppError::unauthorized("Invalid or expired refresh token".to_string())
            } else {
                e
            }
        })?;

        issue_tokens(user.id, &user.email, jwt)
    }

    /// Stores a hashed reset token and mails the plain one. Unknown emails
    /// are a silent no-op, and mail failures are logged, never returned.
    #[instrument(skip(db, dto, email_config), fields(email = %dto.email))]
    pub async fn forgot_password(
        db: &PgPool,
        dto: ForgotPasswordRequest,
        email_config: &EmailConfig,
    ) -> Result<(), AppError> {
        let Some(user) = UserService::find_credentials_by_email(db, &dto.email).await? else {
            info!("Password reset requested for unknown email");
            return Ok(());
        };

        let reset = generate_reset_token();

        sqlx::query(
            "UPDATE users
             SET reset_token = $1, reset_token_exp = $2, updated_at = NOW()
             WHERE id = $3",
        )
        .bind(&reset.hash)
        .bind(reset.expires_at)
        .bind(user.id)
        .execute(db)
        .await?;

        info!(user_id = %user.id, expires_at = %reset.expires_at, "Reset token issued");

        let email_service = EmailService::new(email_config.clone());
        if let Err(e) = email_service
            .send_password_reset_email(&user.email, &user.username, &reset.token)
            .await
        {
            warn!(error = %e, "Failed to send password reset email");
        }

        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn reset_password(
        db: &PgPool,
        dto: ResetPasswordRequest,
        email_config: &EmailConfig,
    ) -> Result<(), AppError> {
        let hashed_password = hash_password(&dto.new_password)?;

        let user: Option<(String, String)> = sqlx::query_as(
            "UPDATE users
             SET password = $1, reset_token = NULL, reset_token_exp = NULL, updated_at = NOW()
             WHERE reset_token = $2 AND reset_token_exp > $3
             RETURNING email, username",
        )
        .bind(&hashed_password)
        .bind(hash_reset_token(&dto.token))
        .bind(Utc::now())
        .fetch_optional(db)
        .await?;

        let (email, username) =
            user.ok_or_else(|| AppError::bad_request(anyhow!("Invalid or expired reset token")))?;

        info!("Password reset completed");

        let email_service = EmailService::new(email_config.clone());
        if let Err(e) = email_service
            .send_password_reset_confirmation(&email, &username)
            .await
        {
            warn!(error = %e, "Failed to send password reset confirmation");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_hash_is_a_real_bcrypt_hash() {
        let hash = DUMMY_PASSWORD_HASH.as_deref().unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("educa-dummy-password", hash).unwrap());
    }

    #[test]
    fn test_verify_against_dummy_never_matches_user_input() {
        assert!(!verify_against_dummy("secret123"));
        assert!(!verify_against_dummy(""));
    }

    #[test]
    fn test_invalid_credentials_message() {
        let err = invalid_credentials();
        assert_eq!(err.status.as_u16(), 401);
        assert_eq!(err.message(), "Invalid email or password");
    }
}
