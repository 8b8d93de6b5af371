use educa_core::{AppError, PaginationParams, cpf};
use educa_models::{CreateStudentDto, Student, StudentId, UpdateStudentDto};
use sqlx::PgPool;
use tracing::instrument;

const STUDENT_COLUMNS: &str = "id, name, email, ra, cpf, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    /// The CPF is checked before any database work and stored digits-only.
    #[instrument(skip(db, dto), fields(ra = %dto.ra))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let cpf = cpf::normalize_valid(&dto.cpf)?;

        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, email, ra, cpf)
             VALUES ($1, $2, $3, $4)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.ra)
        .bind(&cpf)
        .fetch_one(db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students(
        db: &PgPool,
        params: &PaginationParams,
    ) -> Result<(Vec<Student>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await?;

        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students
             ORDER BY created_at {}
             LIMIT $1 OFFSET $2",
            params.order().as_sql()
        ))
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        Ok((students, total))
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, id: StudentId) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_ra(db: &PgPool, ra: &str) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE ra = $1"
        ))
        .bind(ra)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    /// Absent fields keep their stored value. An empty update returns the
    /// current record untouched.
    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: StudentId,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let cpf = dto.cpf.as_deref().map(cpf::normalize_valid).transpose()?;

        if dto.is_empty() {
            return Self::get_student(db, id).await;
        }

        let student = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students
             SET name = COALESCE($1, name),
                 email = COALESCE($2, email),
                 cpf = COALESCE($3, cpf),
                 updated_at = NOW()
             WHERE id = $4
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&cpf)
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: StudentId) -> Result<(), AppError> {
        sqlx::query_scalar::<_, StudentId>("DELETE FROM students WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_one(db)
            .await?;

        Ok(())
    }
}
