use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use sqlx::types::Uuid;

use lms_db::{models::Quiz, repositories};

use crate::{auth::Identity, error::ApiError, state::ApiState, validation};

use super::model::{QuizPayload, ScorePayload};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/quizzes", get(list_quizzes))
        .route("/quizzes", post(create_quiz))
        .route("/quizzes/archived", get(list_archived_quizzes))
        .route("/quizzes/{id}", delete(delete_quiz))
        .route("/quizzes/{id}/archive", post(archive_quiz))
        .route("/quizzes/{id}/restore", post(restore_quiz))
        .route("/quizzes/{id}/viewed", post(mark_quiz_viewed))
        .route("/quizzes/{id}/score", post(submit_score))
}

async fn list_quizzes(State(state): State<ApiState>) -> Result<Json<Vec<Quiz>>, ApiError> {
    let quizzes = repositories::quiz::list(&state.pool, false)
        .await
        .map_err(ApiError::Database)?;

    if quizzes.is_empty() {
        return Err(ApiError::NotFound("quizzes"));
    }

    Ok(Json(quizzes))
}

async fn list_archived_quizzes(State(state): State<ApiState>) -> Result<Json<Vec<Quiz>>, ApiError> {
    let quizzes = repositories::quiz::list(&state.pool, true)
        .await
        .map_err(ApiError::Database)?;

    if quizzes.is_empty() {
        return Err(ApiError::NotFound("quizzes"));
    }

    Ok(Json(quizzes))
}

async fn create_quiz(
    identity: Identity,
    State(state): State<ApiState>,
    Json(payload): Json<QuizPayload>,
) -> Result<(StatusCode, Json<Quiz>), ApiError> {
    validation::validate_payload(&payload)?;

    let quiz = repositories::quiz::insert(
        &state.pool,
        &payload.title,
        &payload.instruction,
        payload.course_id,
        payload.question_count,
        &payload.difficulty,
        &payload.kind,
        &payload.questions,
        identity.user_id,
    )
    .await
    .map_err(ApiError::Database)?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

async fn archive_quiz(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(quiz_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let archived = repositories::quiz::set_archived(&state.pool, quiz_id, true)
        .await
        .map_err(ApiError::Database)?;

    if !archived {
        return Err(ApiError::NotFound("quiz"));
    }

    Ok(StatusCode::OK)
}

async fn restore_quiz(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(quiz_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let restored = repositories::quiz::set_archived(&state.pool, quiz_id, false)
        .await
        .map_err(ApiError::Database)?;

    if !restored {
        return Err(ApiError::NotFound("quiz"));
    }

    Ok(StatusCode::OK)
}

async fn delete_quiz(
    identity: Identity,
    State(state): State<ApiState>,
    Path(quiz_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    identity.require_admin()?;

    let deleted = repositories::quiz::delete(&state.pool, quiz_id)
        .await
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound("quiz"));
    }

    Ok(StatusCode::OK)
}

/// Record that the calling student viewed this quiz.
async fn mark_quiz_viewed(
    identity: Identity,
    State(state): State<ApiState>,
    Path(quiz_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    repositories::viewed::mark_quiz(&state.pool, identity.user_id, quiz_id)
        .await
        .map_err(ApiError::Database)?;

    Ok(StatusCode::OK)
}

/// Record or replace the calling student's score for this quiz.
async fn submit_score(
    identity: Identity,
    State(state): State<ApiState>,
    Path(quiz_id): Path<Uuid>,
    Json(payload): Json<ScorePayload>,
) -> Result<StatusCode, ApiError> {
    validation::validate_payload(&payload)?;

    if payload.score > payload.question_count {
        return Err(ApiError::Validation(
            "Score can not exceed the question count".to_string(),
        ));
    }

    repositories::score::upsert(
        &state.pool,
        identity.user_id,
        quiz_id,
        payload.score,
        payload.question_count,
    )
    .await
    .map_err(ApiError::Database)?;

    Ok(StatusCode::OK)
}
