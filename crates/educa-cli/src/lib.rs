//! # Educa CLI
//!
//! Administrative commands and database seeding for development.
//!
//! ```ignore
//! use educa_cli::seeder::{seed_all, SeedConfig};
//!
//! seed_all(&pool, SeedConfig { users: 5, students: 200 }).await?;
//! ```

pub mod admin;
pub mod seeder;
