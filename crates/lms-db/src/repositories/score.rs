use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::QuizScore;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<QuizScore>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, student_id, quiz_id, score, question_count, created_at
            FROM quiz_scores
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Record or replace a student's score for a quiz.
pub async fn upsert<'e, E>(
    executor: E,
    student_id: Uuid,
    quiz_id: Uuid,
    score: i32,
    question_count: i32,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO quiz_scores (student_id, quiz_id, score, question_count)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (student_id, quiz_id)
            DO UPDATE SET score = $3, question_count = $4, created_at = NOW()
        "#,
    )
    .bind(student_id)
    .bind(quiz_id)
    .bind(score)
    .bind(question_count)
    .execute(executor)
    .await?;
    Ok(())
}
