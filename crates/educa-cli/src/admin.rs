//! Account management commands.

use educa_core::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

/// Inserts a user, returning `None` when the email is already taken.
pub async fn create_user(
    db: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Option<Uuid>, Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (username, email, password)
         VALUES ($1, $2, $3)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(&hashed_password)
    .fetch_optional(db)
    .await?;

    Ok(user_id)
}
