//! # Educa Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: access/refresh token secrets and lifetimes
//! - [`cookie`]: refresh token cookie attributes
//! - [`cors`]: allowed origins
//! - [`email`]: SMTP settings for password reset mail
//! - [`rate_limit`]: throttling of the authentication endpoints
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use educa_config::{JwtConfig, CookieConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cookie_config = CookieConfig::from_env();
//! let addr = ServerConfig::from_env().address();
//! ```

pub mod cookie;
pub mod cors;
pub mod email;
pub mod jwt;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use cookie::{CookieConfig, REFRESH_TOKEN_COOKIE};
pub use cors::CorsConfig;
pub use email::EmailConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
