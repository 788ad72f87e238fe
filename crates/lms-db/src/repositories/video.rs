use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::Video;

pub async fn list<'e, E>(executor: E, archived: bool) -> Result<Vec<Video>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, description, video_url, thumbnail_url, method, owner_id, is_archived, created_at
            FROM videos
            WHERE is_archived = $1
            ORDER BY created_at DESC
        "#,
    )
    .bind(archived)
    .fetch_all(executor)
    .await
}

pub async fn insert<'e, E>(
    executor: E,
    name: &str,
    description: &str,
    video_url: &str,
    thumbnail_url: &str,
    method: &str,
    owner_id: Uuid,
) -> Result<Video, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO videos (name, description, video_url, thumbnail_url, method, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, video_url, thumbnail_url, method, owner_id, is_archived, created_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(video_url)
    .bind(thumbnail_url)
    .bind(method)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn set_archived<'e, E>(
    executor: E,
    video_id: Uuid,
    archived: bool,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE videos
            SET is_archived = $2
            WHERE id = $1
        "#,
    )
    .bind(video_id)
    .bind(archived)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, video_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM videos
            WHERE id = $1
        "#,
    )
    .bind(video_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Ids of all published (non-archived) videos, for progress totals.
pub async fn published_ids<'e, E>(executor: E) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT id FROM videos
            WHERE is_archived = FALSE
        "#,
    )
    .fetch_all(executor)
    .await
}
