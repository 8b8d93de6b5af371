//! Student seeding with valid, unique CPFs.

use educa_core::cpf;
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::SEED_EMAIL_MARKER;
use super::models::StudentSeed;

/// Builds a valid CPF whose first nine digits encode `base`.
///
/// Distinct bases below one billion give distinct CPFs.
pub fn cpf_from_base(base: u64) -> String {
    let body = format!("{:09}", base % 1_000_000_000);
    let mut digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();

    if digits.iter().all(|d| *d == digits[0]) {
        digits[8] = (digits[8] + 1) % 10;
    }

    digits.push(cpf::check_digit(&digits));
    digits.push(cpf::check_digit(&digits));
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

pub fn generate_students(count: usize, run_offset: usize) -> Vec<StudentSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_student(run_offset + idx))
        .collect()
}

fn generate_student(idx: usize) -> StudentSeed {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    let email = format!(
        "{}.{}{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        SEED_EMAIL_MARKER,
        idx
    );

    StudentSeed {
        name: format!("{} {}", first_name, last_name),
        email,
        ra: format!("RA{:010}", idx),
        cpf: cpf_from_base(idx as u64),
    }
}

pub async fn seed_students(
    db: &PgPool,
    count: usize,
    run_offset: usize,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count, run_offset);
    let ids = insert_students_batch(db, &students).await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_students_batch(
    db: &PgPool,
    students: &[StudentSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per student
    const BATCH_SIZE: usize = 1000;

    let mut all_ids = Vec::with_capacity(students.len());
    for chunk in students.chunks(BATCH_SIZE) {
        all_ids.extend(insert_students_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<Vec<Uuid>, sqlx::Error> {
    if students.is_empty() {
        return Ok(vec![]);
    }

    let placeholders: Vec<String> = (0..students.len())
        .map(|i| {
            let base = i * 4;
            format!(
                "(${}, ${}, ${}, ${})",
                base + 1,
                base + 2,
                base + 3,
                base + 4
            )
        })
        .collect();

    let query = format!(
        "INSERT INTO students (name, email, ra, cpf) VALUES {} \
         ON CONFLICT DO NOTHING RETURNING id",
        placeholders.join(", ")
    );

    let mut query_builder = sqlx::query_scalar::<_, Uuid>(&query);
    for student in students {
        query_builder = query_builder
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.ra)
            .bind(&student.cpf);
    }

    query_builder.fetch_all(&mut **tx).await
}
