//! Student domain models and DTOs.

use chrono::{DateTime, Utc};
use educa_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::StudentId;

/// A student record.
///
/// `cpf` is always stored and returned in its digits-only form.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Academic registry number
    #[schema(example = "RA1234567890")]
    pub ra: String,
    #[schema(example = "11144477735")]
    pub cpf: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    #[schema(example = "John Doe")]
    pub name: String,
    #[validate(email(message = "The email is not valid"))]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[validate(length(min = 1, max = 20, message = "ra must be between 1 and 20 characters"))]
    #[schema(example = "RA1234567890")]
    pub ra: String,
    /// Digits only or formatted as `000.000.000-00`
    #[validate(length(min = 1, message = "cpf is required"))]
    #[schema(example = "111.444.777-35")]
    pub cpf: String,
}

/// Partial update; the RA is immutable once assigned.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "The email is not valid"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "cpf is required"))]
    pub cpf: Option<String>,
}

impl UpdateStudentDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.cpf.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedStudentsResponse {
    pub data: Vec<Student>,
    pub pagination: PaginationMeta,
}
