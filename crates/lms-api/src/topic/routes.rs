use std::collections::HashSet;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use sqlx::{PgPool, types::Uuid};

use lms_core::ordering;
use lms_db::repositories;

use crate::{auth::Identity, error::ApiError, metrics, state::ApiState, validation};

use super::model::{OrderedTopic, ReorderPayload, TopicPayload};

/// Create the topic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/courses/{course_id}/topics", get(list_topics))
        .route("/courses/{course_id}/topics", post(create_topic))
        .route("/courses/{course_id}/topics/order", put(reorder_topics))
        .route("/courses/{course_id}/topics/{topic_id}", put(update_topic))
        .route(
            "/courses/{course_id}/topics/{topic_id}",
            delete(delete_topic),
        )
        .route(
            "/courses/{course_id}/topics/{topic_id}/viewed",
            post(mark_topic_viewed),
        )
}

/// A course's topics in position order.
///
/// Stored numbers are loosely typed and may have drifted (duplicates or
/// gaps after a crashed reorder, malformed legacy values). The sorted
/// in-memory list is the source of truth: the response always carries dense
/// 1-based positions, and a non-dense stored sequence is lazily rewritten
/// best-effort.
async fn list_topics(
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<OrderedTopic>>, ApiError> {
    let mut topics = repositories::topic::list_for_course(&state.pool, course_id)
        .await
        .map_err(ApiError::Database)?;

    if topics.is_empty() {
        return Err(ApiError::NotFound("topics"));
    }

    // Malformed numbers sort first; the fetch order (created_at, id) breaks
    // ties stably.
    topics.sort_by_key(|topic| ordering::sort_key(topic.number.as_deref()));

    let dense = ordering::is_dense(topics.iter().map(|topic| topic.number.as_deref()));
    if !dense {
        let assignment: Vec<(Uuid, i64)> = topics
            .iter()
            .enumerate()
            .map(|(index, topic)| (topic.id, index as i64 + 1))
            .collect();
        if let Err(error) = persist_numbering(&state.pool, &assignment).await {
            tracing::warn!("failed to repair topic numbering for course {course_id}: {error}");
        }
    }

    let ordered = topics
        .into_iter()
        .enumerate()
        .map(|(index, topic)| OrderedTopic::from_topic(topic, index as i64 + 1))
        .collect();

    Ok(Json(ordered))
}

/// Append a topic to a course with the next free number.
async fn create_topic(
    identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<TopicPayload>,
) -> Result<(StatusCode, Json<OrderedTopic>), ApiError> {
    validation::validate_payload(&payload)?;

    if repositories::course::get(&state.pool, course_id)
        .await
        .map_err(ApiError::Database)?
        .is_none()
    {
        return Err(ApiError::NotFound("course"));
    }

    let raw_numbers = repositories::topic::raw_numbers(&state.pool, course_id)
        .await
        .map_err(ApiError::Database)?;
    let number = ordering::next_number(raw_numbers.iter().map(Option::as_deref));

    let topic = repositories::topic::insert(
        &state.pool,
        course_id,
        number,
        &payload.name,
        &payload.content,
        &payload.image_urls,
        identity.user_id,
    )
    .await
    .map_err(ApiError::Database)?;

    Ok((
        StatusCode::CREATED,
        Json(OrderedTopic::from_topic(topic, number)),
    ))
}

/// Renumber a course's topics to match the given order: the id at index `i`
/// gets number `i + 1`. The writes run in one transaction, so a reorder is
/// atomic and reapplying the same list is a no-op.
async fn reorder_topics(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<ReorderPayload>,
) -> Result<StatusCode, ApiError> {
    let existing = repositories::topic::list_for_course(&state.pool, course_id)
        .await
        .map_err(ApiError::Database)?;

    if existing.is_empty() {
        return Err(ApiError::NotFound("topics"));
    }

    let existing_ids: HashSet<Uuid> = existing.iter().map(|topic| topic.id).collect();
    let submitted_ids: HashSet<Uuid> = payload.topic_ids.iter().copied().collect();
    if payload.topic_ids.len() != existing.len() || existing_ids != submitted_ids {
        return Err(ApiError::Validation(
            "Topic order must include every topic of the course exactly once".to_string(),
        ));
    }

    let assignment = ordering::renumber(&payload.topic_ids);

    match persist_numbering(&state.pool, &assignment).await {
        Ok(()) => {
            metrics::record_reorder(true);
            Ok(StatusCode::OK)
        }
        Err(error) => {
            metrics::record_reorder(false);
            Err(ApiError::Database(error))
        }
    }
}

async fn update_topic(
    _identity: Identity,
    State(state): State<ApiState>,
    Path((course_id, topic_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<TopicPayload>,
) -> Result<StatusCode, ApiError> {
    validation::validate_payload(&payload)?;

    ensure_topic_in_course(&state.pool, course_id, topic_id).await?;

    let updated = repositories::topic::update(
        &state.pool,
        topic_id,
        &payload.name,
        &payload.content,
        &payload.image_urls,
    )
    .await
    .map_err(ApiError::Database)?;

    if !updated {
        return Err(ApiError::NotFound("topic"));
    }

    Ok(StatusCode::OK)
}

/// Remove a topic. Remaining topics keep their numbers; the next reorder or
/// listing repairs the sequence.
async fn delete_topic(
    identity: Identity,
    State(state): State<ApiState>,
    Path((course_id, topic_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    identity.require_admin()?;

    ensure_topic_in_course(&state.pool, course_id, topic_id).await?;

    let deleted = repositories::topic::delete(&state.pool, topic_id)
        .await
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound("topic"));
    }

    Ok(StatusCode::OK)
}

/// Record that the calling student viewed this topic.
async fn mark_topic_viewed(
    identity: Identity,
    State(state): State<ApiState>,
    Path((course_id, topic_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    ensure_topic_in_course(&state.pool, course_id, topic_id).await?;

    repositories::viewed::mark_topic(&state.pool, identity.user_id, topic_id)
        .await
        .map_err(ApiError::Database)?;

    Ok(StatusCode::OK)
}

async fn ensure_topic_in_course(
    pool: &PgPool,
    course_id: Uuid,
    topic_id: Uuid,
) -> Result<(), ApiError> {
    let topic = repositories::topic::get(pool, topic_id)
        .await
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound("topic"))?;

    if topic.course_id != course_id {
        return Err(ApiError::NotFound("topic"));
    }

    Ok(())
}

/// Write one number per topic inside a single transaction.
async fn persist_numbering(pool: &PgPool, assignment: &[(Uuid, i64)]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for (topic_id, number) in assignment {
        repositories::topic::update_number(&mut *tx, *topic_id, *number).await?;
    }
    tx.commit().await
}
