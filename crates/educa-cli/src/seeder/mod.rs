//! Database seeding for development and demos.
//!
//! Generated rows carry [`SEED_EMAIL_MARKER`] in their email so
//! [`clear_all`] removes them without touching real accounts.

pub mod models;
pub mod students;
pub mod users;

use educa_core::hash_password;
use sqlx::PgPool;
use std::time::Instant;

pub use models::{SeedConfig, StudentSeed, UserSeed};

pub const SEED_EMAIL_MARKER: &str = "+seed";

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Starting database seeding...\n");

    // Continue numbering after earlier runs so emails, RAs and CPFs stay unique.
    let run_offset = next_seed_offset(db).await?;

    if config.users > 0 {
        let password_hash = hash_password(users::SEED_PASSWORD)
            .map_err(|e| format!("Failed to hash password: {}", e.error))?;
        users::seed_users(db, config.users, run_offset, &password_hash).await?;
    }

    if config.students > 0 {
        students::seed_students(db, config.students, run_offset).await?;
    }

    println!("\n✅ Seeding completed in {:?}", start_time.elapsed());
    println!("   Seeded users log in with password: {}", users::SEED_PASSWORD);

    Ok(())
}

async fn next_seed_offset(db: &PgPool) -> Result<usize, sqlx::Error> {
    let pattern = format!("%{}%", SEED_EMAIL_MARKER);
    let (users, students): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM users WHERE email LIKE $1),
                (SELECT COUNT(*) FROM students WHERE email LIKE $1)",
    )
    .bind(&pattern)
    .fetch_one(db)
    .await?;

    Ok(users.max(students).max(0) as usize)
}

/// Deletes every seeded user and student.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Clearing seeded data...");
    let pattern = format!("%{}%", SEED_EMAIL_MARKER);

    let students = sqlx::query("DELETE FROM students WHERE email LIKE $1")
        .bind(&pattern)
        .execute(db)
        .await?
        .rows_affected();

    let users = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(&pattern)
        .execute(db)
        .await?
        .rows_affected();

    println!("   ✓ Removed {} students and {} users", students, users);
    Ok(())
}
