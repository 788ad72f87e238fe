use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{Course, CourseSummary};

/// Listing rows with per-course topic counts in one round trip.
pub async fn list_summaries<'e, E>(
    executor: E,
    archived: bool,
) -> Result<Vec<CourseSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                c.id,
                c.name,
                c.description,
                c.image_url,
                c.owner_id,
                c.is_archived,
                c.created_at,
                c.updated_at,
                COUNT(t.id) as topic_count
            FROM courses c
            LEFT JOIN topics t ON t.course_id = c.id
            WHERE c.is_archived = $1
            GROUP BY c.id, c.name, c.description, c.image_url, c.owner_id, c.is_archived, c.created_at, c.updated_at
            ORDER BY c.created_at DESC
        "#,
    )
    .bind(archived)
    .fetch_all(executor)
    .await
}

pub async fn get<'e, E>(executor: E, course_id: Uuid) -> Result<Option<Course>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, description, image_url, owner_id, is_archived, created_at, updated_at
            FROM courses
            WHERE id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    name: &str,
    description: &str,
    image_url: &str,
    owner_id: Uuid,
) -> Result<Course, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO courses (name, description, image_url, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, image_url, owner_id, is_archived, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(image_url)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    course_id: Uuid,
    name: &str,
    description: &str,
    image_url: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE courses
            SET name = $2, description = $3, image_url = $4, updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(course_id)
    .bind(name)
    .bind(description)
    .bind(image_url)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Flip the soft-delete flag; restoring is the same statement with `false`.
pub async fn set_archived<'e, E>(
    executor: E,
    course_id: Uuid,
    archived: bool,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE courses
            SET is_archived = $2, updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(course_id)
    .bind(archived)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, course_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM courses
            WHERE id = $1
        "#,
    )
    .bind(course_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}
