use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::CodeChallenge;

pub async fn list<'e, E>(executor: E, archived: bool) -> Result<Vec<CodeChallenge>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, title, language, description, expected_output, image_url, owner_id, is_archived, created_at
            FROM code_challenges
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
    title: &str,
    language: &str,
    description: &str,
    expected_output: &str,
    image_url: &str,
    owner_id: Uuid,
) -> Result<CodeChallenge, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO code_challenges (title, language, description, expected_output, image_url, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, language, description, expected_output, image_url, owner_id, is_archived, created_at
        "#,
    )
    .bind(title)
    .bind(language)
    .bind(description)
    .bind(expected_output)
    .bind(image_url)
    .bind(owner_id)
    .fetch_one(executor)
    .await
}

pub async fn set_archived<'e, E>(
    executor: E,
    challenge_id: Uuid,
    archived: bool,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE code_challenges
            SET is_archived = $2
            WHERE id = $1
        "#,
    )
    .bind(challenge_id)
    .bind(archived)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, challenge_id: Uuid) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM code_challenges
            WHERE id = $1
        "#,
    )
    .bind(challenge_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Ids of all published (non-archived) challenges, for progress totals.
pub async fn published_ids<'e, E>(executor: E) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT id FROM code_challenges
            WHERE is_archived = FALSE
        "#,
    )
    .fetch_all(executor)
    .await
}
