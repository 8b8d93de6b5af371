use educa_core::{AppError, PaginationParams, hash_password};
use educa_models::{CreateUserDto, UpdateUserDto, User, UserId};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

const USER_COLUMNS: &str = "id, username, email, created_at, updated_at";

/// Login lookup row; never leaves the service layer.
#[derive(FromRow)]
pub struct UserCredentials {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password)
             VALUES ($1, $2, $3)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        params: &PaginationParams,
    ) -> Result<(Vec<User>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             ORDER BY created_at {}
             LIMIT $1 OFFSET $2",
            params.order().as_sql()
        ))
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        Ok((users, total))
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: UserId) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    /// Absent fields keep their stored value. A missing user surfaces as
    /// "Record not found".
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        id: UserId,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let hashed_password = dto.password.as_deref().map(hash_password).transpose()?;

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET username = COALESCE($1, username),
                 email = COALESCE($2, email),
                 password = COALESCE($3, password),
                 updated_at = NOW()
             WHERE id = $4
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: UserId) -> Result<(), AppError> {
        sqlx::query_scalar::<_, UserId>("DELETE FROM users WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_one(db)
            .await?;

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn find_credentials_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(credentials)
    }
}
