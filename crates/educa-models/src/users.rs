//! User domain models and DTOs.
//!
//! Users are the accounts that sign in to the API. The password hash is
//! never part of [`User`]; queries that need it select into a local row type.

use chrono::{DateTime, Utc};
use educa_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::UserId;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[schema(example = "jdoe")]
    pub username: String,
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100, message = "username must be between 1 and 100 characters"))]
    #[schema(example = "jdoe")]
    pub username: String,
    #[validate(email(message = "The email is not valid"))]
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "username must be between 1 and 100 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "The email is not valid"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub pagination: PaginationMeta,
}
