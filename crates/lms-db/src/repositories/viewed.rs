//! Viewed-record lookups and idempotent view marking.
//!
//! One row per (student, resource); re-marking an already-viewed resource is
//! a no-op. `viewed_courses` is the migration shim from the legacy
//! course-level tracking, kept readable beside the per-topic table.

use sqlx::{Executor, Postgres};
use uuid::Uuid;

pub async fn course_ids<'e, E>(executor: E, student_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT course_id FROM viewed_courses
            WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

pub async fn mark_course<'e, E>(
    executor: E,
    student_id: Uuid,
    course_id: Uuid,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO viewed_courses (student_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, course_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn topic_ids<'e, E>(executor: E, student_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT topic_id FROM viewed_topics
            WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

pub async fn mark_topic<'e, E>(
    executor: E,
    student_id: Uuid,
    topic_id: Uuid,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO viewed_topics (student_id, topic_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, topic_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(topic_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn video_ids<'e, E>(executor: E, student_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT video_id FROM viewed_videos
            WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

pub async fn mark_video<'e, E>(
    executor: E,
    student_id: Uuid,
    video_id: Uuid,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO viewed_videos (student_id, video_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, video_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(video_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn quiz_ids<'e, E>(executor: E, student_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT quiz_id FROM viewed_quizzes
            WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

pub async fn mark_quiz<'e, E>(
    executor: E,
    student_id: Uuid,
    quiz_id: Uuid,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO viewed_quizzes (student_id, quiz_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, quiz_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(quiz_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn code_ids<'e, E>(executor: E, student_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT challenge_id FROM viewed_code
            WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_all(executor)
    .await
}

pub async fn mark_code<'e, E>(
    executor: E,
    student_id: Uuid,
    challenge_id: Uuid,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO viewed_code (student_id, challenge_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, challenge_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(challenge_id)
    .execute(executor)
    .await?;
    Ok(())
}
