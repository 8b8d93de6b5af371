//! Seed records and configuration.

/// Seed data for creating a user.
pub struct UserSeed {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Seed data for creating a student.
pub struct StudentSeed {
    pub name: String,
    pub email: String,
    pub ra: String,
    pub cpf: String,
}

/// How many rows of each kind to generate.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub users: usize,
    pub students: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 5,
            students: 100,
        }
    }
}
