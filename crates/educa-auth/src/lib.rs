//! # Educa Auth
//!
//! Authentication primitives for the Educa API.
//!
//! - [`claims`]: JWT claim structures for access and refresh tokens
//! - [`jwt`]: token creation and verification
//! - [`reset`]: password reset token generation and hashing
//!
//! # Example
//!
//! ```ignore
//! use educa_auth::{create_access_token, create_refresh_token, verify_token};
//! use educa_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let access = create_access_token(user_id, "user@example.com", &config)?;
//! let refresh = create_refresh_token(user_id, &config)?;
//! let claims = verify_token(&access, &config)?;
//! ```

pub mod claims;
pub mod jwt;
pub mod reset;

// Re-export commonly used types at crate root
pub use claims::{Claims, RefreshTokenClaims};
pub use jwt::{create_access_token, create_refresh_token, verify_refresh_token, verify_token};
pub use reset::{ResetToken, generate_reset_token, hash_reset_token};
