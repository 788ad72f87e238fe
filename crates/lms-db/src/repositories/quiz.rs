use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::Quiz;

pub async fn list<'e, E>(executor: E, archived: bool) -> Result<Vec<Quiz>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, title, instruction, course_id, question_count, difficulty, kind, questions, owner_id, is_archived, created_at
            FROM quizzes
            WHERE is_archived = $1
            ORDER BY created_at DESC
        "#,
    )
    .bind(archived)
    .fetch_all(executor)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn insert<'e, E>(
    executor: E,
    title: &str,
    instruction: &str,
    course_id: Option<Uuid>,
    question_count: i32,
    difficulty: &str,
    kind: &str,
    questions: &serde_json::Value,
    owner_id: Uuid,
) -> Result<Quiz, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO quizzes (title, instruction, course_id, question_count, difficulty, kind, questions, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, instruction, course_id, question_count, difficulty, kind, questions, owner_id, is_archived, created_at
        "#,
    )
    .bind(title)
    .bind(instruction)
    .bind(course_id)
    .bind(question_count)
    .bind(difficulty)
    .bind(kind)
    .bind(questions)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn set_archived<'e, E>(
    executor: E,
    quiz_id: Uuid,
    archived: bool,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE quizzes
            SET is_archived = $2
            WHERE id = $1
        "#,
    )
    .bind(quiz_id)
    .bind(archived)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, quiz_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM quizzes
            WHERE id = $1
        "#,
    )
    .bind(quiz_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Ids of all published (non-archived) quizzes, for progress totals.
pub async fn published_ids<'e, E>(executor: E) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT id FROM quizzes
            WHERE is_archived = FALSE
        "#,
    )
    .fetch_all(executor)
    .await
}
