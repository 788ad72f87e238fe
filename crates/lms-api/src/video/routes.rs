use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use sqlx::types::Uuid;

use lms_db::{models::Video, repositories};

use crate::{auth::Identity, error::ApiError, state::ApiState, validation};

use super::model::VideoPayload;

/// Create the video routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/videos", get(list_videos))
        .route("/videos", post(create_video))
        .route("/videos/archived", get(list_archived_videos))
        .route("/videos/{id}", delete(delete_video))
        .route("/videos/{id}/archive", post(archive_video))
        .route("/videos/{id}/restore", post(restore_video))
        .route("/videos/{id}/viewed", post(mark_video_viewed))
}

async fn list_videos(State(state): State<ApiState>) -> Result<Json<Vec<Video>>, ApiError> {
    let videos = repositories::video::list(&state.pool, false)
        .await
        .map_err(ApiError::Database)?;

    if videos.is_empty() {
        return Err(ApiError::NotFound("videos"));
    }

    Ok(Json(videos))
}

async fn list_archived_videos(State(state): State<ApiState>) -> Result<Json<Vec<Video>>, ApiError> {
    let videos = repositories::video::list(&state.pool, true)
        .await
        .map_err(ApiError::Database)?;

    if videos.is_empty() {
        return Err(ApiError::NotFound("videos"));
    }

    Ok(Json(videos))
}

async fn create_video(
    identity: Identity,
    State(state): State<ApiState>,
    Json(payload): Json<VideoPayload>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    validation::validate_payload(&payload)?;

    let video = repositories::video::insert(
        &state.pool,
        &payload.name,
        &payload.description,
        &payload.video_url,
        &payload.thumbnail_url,
        &payload.method,
        identity.user_id,
    )
    .await
    .map_err(ApiError::Database)?;

    Ok((StatusCode::CREATED, Json(video)))
}

async fn archive_video(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(video_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let archived = repositories::video::set_archived(&state.pool, video_id, true)
        .await
        .map_err(ApiError::Database)?;

    if !archived {
        return Err(ApiError::NotFound("video"));
    }

    Ok(StatusCode::OK)
}

async fn restore_video(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(video_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let restored = repositories::video::set_archived(&state.pool, video_id, false)
        .await
        .map_err(ApiError::Database)?;

    if !restored {
        return Err(ApiError::NotFound("video"));
    }

    Ok(StatusCode::OK)
}

async fn delete_video(
    identity: Identity,
    State(state): State<ApiState>,
    Path(video_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    identity.require_admin()?;

    let deleted = repositories::video::delete(&state.pool, video_id)
        .await
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound("video"));
    }

    Ok(StatusCode::OK)
}

/// Record that the calling student viewed this video.
async fn mark_video_viewed(
    identity: Identity,
    State(state): State<ApiState>,
    Path(video_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    repositories::viewed::mark_video(&state.pool, identity.user_id, video_id)
        .await
        .map_err(ApiError::Database)?;

    Ok(StatusCode::OK)
}
