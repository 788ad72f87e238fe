use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::Topic;

/// Fetch a course's topics in insertion order. Position sorting happens in
/// the caller via `lms_core::ordering::sort_key`, since stored numbers are
/// loosely typed and may need coercion.
pub async fn list_for_course<'e, E>(executor: E, course_id: Uuid) -> Result<Vec<Topic>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, course_id, number, name, content, image_urls, owner_id, created_at, updated_at
            FROM topics
            WHERE course_id = $1
            ORDER BY created_at, id
        "#,
    )
    .bind(course_id)
    .fetch_all(executor)
    .await
}

/// Raw `number` values for a course, used by next-number computation.
pub async fn raw_numbers<'e, E>(
    executor: E,
    course_id: Uuid,
) -> Result<Vec<Option<String>>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT number FROM topics
            WHERE course_id = $1
        "#,
    )
    .bind(course_id)
    .fetch_all(executor)
    .await
}

pub async fn get<'e, E>(executor: E, topic_id: Uuid) -> Result<Option<Topic>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, course_id, number, name, content, image_urls, owner_id, created_at, updated_at
            FROM topics
            WHERE id = $1
        "#,
    )
    .bind(topic_id)
    .fetch_optional(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    course_id: Uuid,
    number: i64,
    name: &str,
    content: &str,
    image_urls: &[String],
    owner_id: Uuid,
) -> Result<Topic, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO topics (course_id, number, name, content, image_urls, owner_id)
            VALUES ($1, $2::text, $3, $4, $5, $6)
            RETURNING id, course_id, number, name, content, image_urls, owner_id, created_at, updated_at
        "#,
    )
    .bind(course_id)
    .bind(number)
    .bind(name)
    .bind(content)
    .bind(image_urls)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    topic_id: Uuid,
    name: &str,
    content: &str,
    image_urls: &[String],
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE topics
            SET name = $2, content = $3, image_urls = $4, updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(topic_id)
    .bind(name)
    .bind(content)
    .bind(image_urls)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Persist one topic's position. Reorder and self-healing callers run this
/// once per topic inside a transaction.
pub async fn update_number<'e, E>(
    executor: E,
    topic_id: Uuid,
    number: i64,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE topics
            SET number = $2::text, updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(topic_id)
    .bind(number)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, topic_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM topics
            WHERE id = $1
        "#,
    )
    .bind(topic_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Topic ids per course across all non-archived courses, for the
/// course-category progress total.
pub async fn ids_by_published_course<'e, E>(
    executor: E,
) -> Result<Vec<(Uuid, Uuid)>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT t.course_id, t.id
            FROM topics t
            JOIN courses c ON c.id = t.course_id
            WHERE c.is_archived = FALSE
        "#,
    )
    .fetch_all(executor)
    .await
}
