//! User seeding.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::SEED_EMAIL_MARKER;
use super::models::UserSeed;

/// Every generated user shares this password.
pub const SEED_PASSWORD: &str = "password123";

pub fn generate_users(count: usize, run_offset: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_user(run_offset + idx, password_hash))
        .collect()
}

fn generate_user(idx: usize, password_hash: &str) -> UserSeed {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let username = format!("{}{}", first_name.to_lowercase(), idx);
    let email = format!(
        "{}.{}{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        SEED_EMAIL_MARKER,
        idx
    );

    UserSeed {
        username,
        email,
        password_hash: password_hash.to_string(),
    }
}

pub async fn seed_users(
    db: &PgPool,
    count: usize,
    run_offset: usize,
    password_hash: &str,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let users = generate_users(count, run_offset, password_hash);
    let ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts users in batches inside a single transaction.
pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 3 params per user
    const BATCH_SIZE: usize = 1000;

    let mut all_ids = Vec::with_capacity(users.len());
    for chunk in users.chunks(BATCH_SIZE) {
        all_ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, sqlx::Error> {
    if users.is_empty() {
        return Ok(vec![]);
    }

    let placeholders: Vec<String> = (0..users.len())
        .map(|i| {
            let base = i * 3;
            format!("(${}, ${}, ${})", base + 1, base + 2, base + 3)
        })
        .collect();

    let query = format!(
        "INSERT INTO users (username, email, password) VALUES {} \
         ON CONFLICT (email) DO NOTHING RETURNING id",
        placeholders.join(", ")
    );

    let mut query_builder = sqlx::query_scalar::<_, Uuid>(&query);
    for user in users {
        query_builder = query_builder
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash);
    }

    query_builder.fetch_all(&mut **tx).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_users_count_and_marker() {
        let users = generate_users(20, 0, "hash");
        assert_eq!(users.len(), 20);
        for user in &users {
            assert!(user.email.contains(SEED_EMAIL_MARKER));
            assert!(user.email.ends_with("@example.com"));
            assert_eq!(user.password_hash, "hash");
        }
    }

    #[test]
    fn test_generated_emails_are_unique() {
        let users = generate_users(200, 5000, "hash");
        let mut emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), 200);
    }
}
