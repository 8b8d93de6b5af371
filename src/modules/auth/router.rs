use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::controller::{
    forgot_password, login, logout, protected, refresh_token, reset_password, signup,
};
use crate::middleware::rate_limit::auth_rate_limit;
use crate::state::AppState;

/// Credential-handling routes are throttled per client; logout, refresh and
/// the protected check are not.
pub fn init_auth_router(state: AppState) -> Router<AppState> {
    let throttled = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/forgot-password", put(forgot_password))
        .route("/reset-password", put(reset_password))
        .route_layer(middleware::from_fn_with_state(state, auth_rate_limit));

    Router::new()
        .merge(throttled)
        .route("/logout", post(logout))
        .route("/refresh-token", put(refresh_token))
        .route("/protected", get(protected))
}
