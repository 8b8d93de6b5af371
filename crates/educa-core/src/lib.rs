//! # Educa Core
//!
//! Core types, errors, and utilities shared by every Educa crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`cpf`]: Brazilian CPF normalization and check-digit validation
//! - [`persistence`]: Classification of database failures into HTTP errors
//! - [`pagination`]: Page/limit/order query handling and response metadata
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use educa_core::{AppError, cpf};
//!
//! cpf::validate(&dto.cpf)?;
//! let student = sqlx::query_as::<_, Student>(sql).fetch_one(db).await?; // classified on error
//! ```

pub mod cpf;
pub mod errors;
pub mod pagination;
pub mod password;
pub mod persistence;

// Re-export commonly used types at crate root
pub use cpf::CpfError;
pub use errors::{AppError, ErrorResponse};
pub use pagination::{PaginationMeta, PaginationParams, SortOrder};
pub use password::{hash_password, verify_password};
pub use persistence::{PersistenceCode, PersistenceError, classify};
