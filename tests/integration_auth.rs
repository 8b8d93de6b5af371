mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    authed_request, create_test_user, generate_unique_email, json_request, read_json,
    refresh_cookie_value, setup_test_app,
};
use educa_auth::{generate_reset_token, verify_token};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_signup_returns_token_and_cookie(pool: PgPool) {
    let app = setup_test_app(pool);
    let email = generate_unique_email();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/signup",
            json!({ "username": "ana", "email": email, "password": "secret123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(refresh_cookie_value(&response).is_some());

    let body = read_json(response).await;
    let claims = verify_token(body["token"].as_str().unwrap(), &common::test_jwt_config()).unwrap();
    assert_eq!(claims.email, email);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_signup_duplicate_email(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/signup",
            json!({ "username": "ana", "email": user.email, "password": "secret123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(read_json(response).await["message"], "email is already in use");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_login_success(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            json!({ "email": user.email, "password": user.password }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(refresh_cookie_value(&response).is_some());

    let body = read_json(response).await;
    let claims = verify_token(body["token"].as_str().unwrap(), &common::test_jwt_config()).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_login_wrong_password(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            json!({ "email": user.email, "password": "wrong-password" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        read_json(response).await["message"],
        "Invalid email or password"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_login_unknown_email(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            json!({ "email": "nobody@example.com", "password": "secret123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        read_json(response).await["message"],
        "Invalid email or password"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_refresh_rotates_cookie(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let app = setup_test_app(pool);

    let login = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            json!({ "email": user.email, "password": user.password }),
        ))
        .await
        .unwrap();
    let refresh = refresh_cookie_value(&login).unwrap();

    let request = Request::builder()
        .method("PUT")
        .uri("/api/refresh-token")
        .header(header::COOKIE, format!("refreshToken={}", refresh))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let rotated = refresh_cookie_value(&response).unwrap();
    assert_ne!(rotated, refresh);
    assert!(read_json(response).await["token"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_refresh_for_deleted_user(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let refresh = educa_auth::create_refresh_token(user.id, &common::test_jwt_config()).unwrap();
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/refresh-token")
        .header(header::COOKIE, format!("refreshToken={}", refresh))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_forgot_password_does_not_reveal_accounts(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/forgot-password",
            json!({ "email": "nobody@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await["message"],
        "An email has been sent to nobody@example.com with further instructions."
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_forgot_password_stores_hashed_token(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/forgot-password",
            json!({ "email": user.email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored: Option<String> = sqlx::query_scalar("SELECT reset_token FROM users WHERE id = $1")
        .bind(user.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored.unwrap().len(), 64);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_reset_password_flow(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let reset = generate_reset_token();
    sqlx::query("UPDATE users SET reset_token = $1, reset_token_exp = $2 WHERE id = $3")
        .bind(&reset.hash)
        .bind(reset.expires_at)
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/reset-password",
            json!({ "token": reset.token, "newPassword": "brand-new-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await["message"],
        "Password has been reset successfully."
    );

    // single use
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/reset-password",
            json!({ "token": reset.token, "newPassword": "another-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await["message"],
        "Invalid or expired reset token"
    );

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            json!({ "email": user.email, "password": "brand-new-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_reset_password_expired_token(pool: PgPool) {
    let user = create_test_user(&pool, "secret123").await;
    let reset = generate_reset_token();
    sqlx::query(
        "UPDATE users SET reset_token = $1, reset_token_exp = NOW() - INTERVAL '1 minute' WHERE id = $2",
    )
    .bind(&reset.hash)
    .bind(user.id)
    .execute(&pool)
    .await
    .unwrap();
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/reset-password",
            json!({ "token": reset.token, "newPassword": "brand-new-pass" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_signup_token_opens_protected_routes(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/signup",
            json!({ "username": "ana", "email": generate_unique_email(), "password": "secret123" }),
        ))
        .await
        .unwrap();
    let token = read_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(authed_request(
            "GET",
            "/api/students",
            &format!("Bearer {}", token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
