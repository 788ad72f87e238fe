use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use sqlx::types::Uuid;

use lms_core::ordering;
use lms_db::{
    models::{Course, CourseSummary},
    repositories,
};

use crate::{auth::Identity, error::ApiError, state::ApiState, validation};

use super::model::CoursePayload;

/// Create the course routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses", post(create_course))
        .route("/courses/archived", get(list_archived_courses))
        .route("/courses/{id}", put(update_course))
        .route("/courses/{id}", delete(delete_course))
        .route("/courses/{id}/archive", post(archive_course))
        .route("/courses/{id}/restore", post(restore_course))
        .route("/courses/{id}/viewed", post(mark_course_viewed))
}

/// Published courses with topic counts, ordered by the number embedded in
/// the course name ("2 - Data Structures" before "10 - Capstone").
async fn list_courses(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CourseSummary>>, ApiError> {
    let mut courses = repositories::course::list_summaries(&state.pool, false)
        .await
        .map_err(ApiError::Database)?;

    if courses.is_empty() {
        return Err(ApiError::NotFound("courses"));
    }

    courses.sort_by_key(|course| ordering::leading_number(&course.name));

    Ok(Json(courses))
}

async fn list_archived_courses(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CourseSummary>>, ApiError> {
    let courses = repositories::course::list_summaries(&state.pool, true)
        .await
        .map_err(ApiError::Database)?;

    if courses.is_empty() {
        return Err(ApiError::NotFound("courses"));
    }

    Ok(Json(courses))
}

async fn create_course(
    identity: Identity,
    State(state): State<ApiState>,
    Json(payload): Json<CoursePayload>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    validation::validate_payload(&payload)?;

    let course = repositories::course::insert(
        &state.pool,
        &payload.name,
        &payload.description,
        &payload.image_url,
        identity.user_id,
    )
    .await
    .map_err(ApiError::Database)?;

    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<CoursePayload>,
) -> Result<StatusCode, ApiError> {
    validation::validate_payload(&payload)?;

    let updated = repositories::course::update(
        &state.pool,
        course_id,
        &payload.name,
        &payload.description,
        &payload.image_url,
    )
    .await
    .map_err(ApiError::Database)?;

    if !updated {
        return Err(ApiError::NotFound("course"));
    }

    Ok(StatusCode::OK)
}

async fn archive_course(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let archived = repositories::course::set_archived(&state.pool, course_id, true)
        .await
        .map_err(ApiError::Database)?;

    if !archived {
        return Err(ApiError::NotFound("course"));
    }

    Ok(StatusCode::OK)
}

async fn restore_course(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let restored = repositories::course::set_archived(&state.pool, course_id, false)
        .await
        .map_err(ApiError::Database)?;

    if !restored {
        return Err(ApiError::NotFound("course"));
    }

    Ok(StatusCode::OK)
}

async fn delete_course(
    identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    identity.require_admin()?;

    let deleted = repositories::course::delete(&state.pool, course_id)
        .await
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound("course"));
    }

    Ok(StatusCode::OK)
}

/// Record that the calling student viewed this course. Kept for clients
/// that still track at course granularity; per-topic marking supersedes it.
async fn mark_course_viewed(
    identity: Identity,
    State(state): State<ApiState>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if repositories::course::get(&state.pool, course_id)
        .await
        .map_err(ApiError::Database)?
        .is_none()
    {
        return Err(ApiError::NotFound("course"));
    }

    repositories::viewed::mark_course(&state.pool, identity.user_id, course_id)
        .await
        .map_err(ApiError::Database)?;

    Ok(StatusCode::OK)
}
