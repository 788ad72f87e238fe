use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use sqlx::types::Uuid;

use lms_db::{models::CodeChallenge, repositories};

use crate::{auth::Identity, error::ApiError, state::ApiState, validation};

use super::model::CodeChallengePayload;

/// Create the code challenge routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/code-challenges", get(list_challenges))
        .route("/code-challenges", post(create_challenge))
        .route("/code-challenges/archived", get(list_archived_challenges))
        .route("/code-challenges/{id}", delete(delete_challenge))
        .route("/code-challenges/{id}/archive", post(archive_challenge))
        .route("/code-challenges/{id}/restore", post(restore_challenge))
        .route("/code-challenges/{id}/viewed", post(mark_challenge_viewed))
}

async fn list_challenges(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CodeChallenge>>, ApiError> {
    let challenges = repositories::code::list(&state.pool, false)
        .await
        .map_err(ApiError::Database)?;

    if challenges.is_empty() {
        return Err(ApiError::NotFound("code challenges"));
    }

    Ok(Json(challenges))
}

async fn list_archived_challenges(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CodeChallenge>>, ApiError> {
    let challenges = repositories::code::list(&state.pool, true)
        .await
        .map_err(ApiError::Database)?;

    if challenges.is_empty() {
        return Err(ApiError::NotFound("code challenges"));
    }

    Ok(Json(challenges))
}

async fn create_challenge(
    identity: Identity,
    State(state): State<ApiState>,
    Json(payload): Json<CodeChallengePayload>,
) -> Result<(StatusCode, Json<CodeChallenge>), ApiError> {
    validation::validate_payload(&payload)?;

    let challenge = repositories::code::insert(
        &state.pool,
        &payload.title,
        &payload.language,
        &payload.description,
        &payload.expected_output,
        &payload.image_url,
        identity.user_id,
    )
    .await
    .map_err(ApiError::Database)?;

    Ok((StatusCode::CREATED, Json(challenge)))
}

async fn archive_challenge(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(challenge_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let archived = repositories::code::set_archived(&state.pool, challenge_id, true)
        .await
        .map_err(ApiError::Database)?;

    if !archived {
        return Err(ApiError::NotFound("code challenge"));
    }

    Ok(StatusCode::OK)
}

async fn restore_challenge(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(challenge_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let restored = repositories::code::set_archived(&state.pool, challenge_id, false)
        .await
        .map_err(ApiError::Database)?;

    if !restored {
        return Err(ApiError::NotFound("code challenge"));
    }

    Ok(StatusCode::OK)
}

async fn delete_challenge(
    identity: Identity,
    State(state): State<ApiState>,
    Path(challenge_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    identity.require_admin()?;

    let deleted = repositories::code::delete(&state.pool, challenge_id)
        .await
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound("code challenge"));
    }

    Ok(StatusCode::OK)
}

/// Record that the calling student viewed this challenge.
async fn mark_challenge_viewed(
    identity: Identity,
    State(state): State<ApiState>,
    Path(challenge_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    repositories::viewed::mark_code(&state.pool, identity.user_id, challenge_id)
        .await
        .map_err(ApiError::Database)?;

    Ok(StatusCode::OK)
}
