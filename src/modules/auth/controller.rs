use anyhow::anyhow;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use educa_config::REFRESH_TOKEN_COOKIE;
use educa_core::{AppError, ErrorResponse};
use educa_models::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest, SignupRequest,
    TokenResponse,
};
use tracing::instrument;

use super::service::{AuthService, IssuedTokens};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::cookies::{clear_refresh_cookie, refresh_cookie};
use crate::validator::ValidatedJson;

fn token_response(
    state: &AppState,
    jar: CookieJar,
    tokens: IssuedTokens,
) -> (CookieJar, Json<TokenResponse>) {
    (
        jar.add(refresh_cookie(&tokens.refresh_token, &state.cookie_config)),
        Json(TokenResponse {
            token: tokens.access_token,
        }),
    )
}

/// Create an account and sign in
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created; refresh token set as cookie", body = TokenResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 429, description = "Too many requests", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::signup(&state.db, dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, token_response(&state, jar, tokens)))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; refresh token set as cookie", body = TokenResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 429, description = "Too many requests", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(token_response(&state, jar, tokens))
}

/// Clear the refresh token cookie
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (
        jar.add(clear_refresh_cookie(&state.cookie_config)),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

/// Exchange the refresh token cookie for a new access token
#[utoipa::path(
    put,
    path = "/api/refresh-token",
    responses(
        (status = 200, description = "New access token; refresh cookie rotated", body = TokenResponse),
        (status = 400, description = "No token provided", body = ErrorResponse),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::bad_request(anyhow!("No token provided")))?;

    let tokens = AuthService::refresh(&state.db, &token, &state.jwt_config).await?;
    Ok(token_response(&state, jar, tokens))
}

/// Request a password reset email
#[utoipa::path(
    put,
    path = "/api/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset instructions sent if the account exists", body = MessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 429, description = "Too many requests", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = dto.email.clone();
    AuthService::forgot_password(&state.db, dto, &state.email_config).await?;

    Ok(Json(MessageResponse::new(format!(
        "An email has been sent to {} with further instructions.",
        email
    ))))
}

/// Set a new password using a reset token
#[utoipa::path(
    put,
    path = "/api/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Invalid or expired reset token", body = ErrorResponse),
        (status = 429, description = "Too many requests", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::reset_password(&state.db, dto, &state.email_config).await?;
    Ok(Json(MessageResponse::new(
        "Password has been reset successfully.",
    )))
}

/// Check that the bearer token is valid
#[utoipa::path(
    get,
    path = "/api/protected",
    responses(
        (status = 200, description = "Token accepted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn protected(_auth_user: AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::new("You're authenticated as user"))
}
