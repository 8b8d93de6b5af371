//! # Educa Models
//!
//! Domain models and DTOs shared by the API server and the CLI.
//!
//! - [`ids`]: strongly-typed entity IDs
//! - [`students`]: student records and their create/update payloads
//! - [`users`]: user accounts
//! - [`auth`]: login, signup and password reset payloads

pub mod auth;
pub mod ids;
pub mod students;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, ResetPasswordRequest, SignupRequest,
    TokenResponse,
};
pub use ids::{StudentId, UserId};
pub use students::{CreateStudentDto, PaginatedStudentsResponse, Student, UpdateStudentDto};
pub use users::{CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User};
