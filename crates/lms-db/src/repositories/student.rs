use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::Student;

pub async fn list<'e, E>(executor: E) -> Result<Vec<Student>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email, profile_url, age, birthdate, course, block, gender, student_number, username, status, created_at
            FROM students
            ORDER BY LOWER(name), name
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get<'e, E>(executor: E, student_id: Uuid) -> Result<Option<Student>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email, profile_url, age, birthdate, course, block, gender, student_number, username, status, created_at
            FROM students
            WHERE id = $1
        "#,
    )
    .bind(student_id)
    .fetch_optional(executor)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update<'e, E>(
    executor: E,
    student_id: Uuid,
    name: &str,
    email: &str,
    age: &str,
    birthdate: &str,
    username: &str,
    course: &str,
    gender: &str,
    status: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE students
            SET name = $2, email = $3, age = $4, birthdate = $5, username = $6, course = $7, gender = $8, status = $9
            WHERE id = $1
        "#,
    )
    .bind(student_id)
    .bind(name)
    .bind(email)
    .bind(age)
    .bind(birthdate)
    .bind(username)
    .bind(course)
    .bind(gender)
    .bind(status)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, student_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM students
            WHERE id = $1
        "#,
    )
    .bind(student_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}
