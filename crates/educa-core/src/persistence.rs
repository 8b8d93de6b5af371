//! Classification of persistence-layer failures into HTTP errors.
//!
//! Database failures are first reduced to a [`PersistenceError`]: a short
//! symbolic `code`, a fallback `name` and, for constraint violations, the
//! offending column as `target`. [`classify`] then maps that signal onto an
//! [`AppError`] with a fixed status and message.
//!
//! | code / name        | status | message                            |
//! |--------------------|--------|------------------------------------|
//! | `P2002`            | 409    | `{target} is already in use`       |
//! | `P2025`            | 400    | `Record not found`                 |
//! | `P2000`            | 400    | `The field is too long`            |
//! | `ValidationError`  | 400    | `The field is missing or invalid`  |
//! | anything else      | 500    | `Internal server error`            |

use anyhow::anyhow;
use axum::http::StatusCode;

use crate::errors::AppError;

pub const UNIQUE_CONSTRAINT: &str = "P2002";
pub const RECORD_NOT_FOUND: &str = "P2025";
pub const VALUE_TOO_LONG: &str = "P2000";
pub const VALIDATION_ERROR: &str = "ValidationError";

/// Error signal produced by the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceError {
    pub code: Option<String>,
    pub name: Option<String>,
    pub target: Option<String>,
}

/// The closed set of persistence failures the API distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceCode {
    UniqueConstraint,
    RecordNotFound,
    ValueTooLong,
    Validation,
    Unknown,
}

impl PersistenceCode {
    pub fn from_key(key: &str) -> Self {
        match key {
            UNIQUE_CONSTRAINT => Self::UniqueConstraint,
            RECORD_NOT_FOUND => Self::RecordNotFound,
            VALUE_TOO_LONG => Self::ValueTooLong,
            VALIDATION_ERROR => Self::Validation,
            _ => Self::Unknown,
        }
    }
}

impl PersistenceError {
    pub fn with_code(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            ..Self::default()
        }
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// `code` when present and non-empty, otherwise `name`.
    pub fn key(&self) -> Option<&str> {
        match self.code.as_deref() {
            Some(code) if !code.is_empty() => Some(code),
            _ => self.name.as_deref(),
        }
    }

    pub fn kind(&self) -> PersistenceCode {
        self.key()
            .map(PersistenceCode::from_key)
            .unwrap_or(PersistenceCode::Unknown)
    }
}

/// Maps a persistence error onto the HTTP error returned to the client.
pub fn classify(err: &PersistenceError) -> AppError {
    match err.kind() {
        PersistenceCode::UniqueConstraint => {
            let target = err.target.as_deref().unwrap_or("field");
            AppError::conflict(anyhow!("{target} is already in use"))
        }
        PersistenceCode::RecordNotFound => AppError::bad_request(anyhow!("Record not found")),
        PersistenceCode::ValueTooLong => AppError::bad_request(anyhow!("The field is too long")),
        PersistenceCode::Validation => {
            AppError::bad_request(anyhow!("The field is missing or invalid"))
        }
        PersistenceCode::Unknown => {
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow!("Internal server error"))
        }
    }
}

/// Extracts the column from a Postgres constraint name such as
/// `students_cpf_key` (table `students`, column `cpf`).
pub fn constraint_target(constraint: &str, table: Option<&str>) -> String {
    let trimmed = constraint
        .strip_suffix("_key")
        .or_else(|| constraint.strip_suffix("_unique"))
        .unwrap_or(constraint);

    let without_table = match table {
        Some(table) => trimmed
            .strip_prefix(table)
            .and_then(|rest| rest.strip_prefix('_')),
        None => None,
    };

    without_table
        .or_else(|| trimmed.split_once('_').map(|(_, column)| column))
        .unwrap_or(trimmed)
        .to_string()
}

impl From<&sqlx::Error> for PersistenceError {
    fn from(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::with_code(RECORD_NOT_FOUND),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => {
                    let target = db_err
                        .constraint()
                        .map(|c| constraint_target(c, db_err.table()))
                        .unwrap_or_else(|| "field".to_string());
                    Self::with_code(UNIQUE_CONSTRAINT).target(target)
                }
                Some("22001") => Self::with_code(VALUE_TOO_LONG),
                Some("23502") | Some("23514") | Some("22P02") => Self::with_name(VALIDATION_ERROR),
                Some(code) => Self::with_name(&format!("DatabaseError({code})")),
                None => Self::with_name("DatabaseError"),
            },
            sqlx::Error::PoolTimedOut => Self::with_name("PoolTimedOut"),
            sqlx::Error::Io(_) => Self::with_name("Io"),
            _ => Self::with_name("Unknown"),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let signal = PersistenceError::from(&err);
        let app_error = classify(&signal);

        if app_error.status.is_server_error() {
            tracing::error!(error = %err, "Database operation failed");
        } else {
            tracing::warn!(error = %err, key = ?signal.key(), "Database operation rejected");
        }

        app_error
    }
}
