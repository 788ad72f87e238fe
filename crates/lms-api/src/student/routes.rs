use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
};
use sqlx::{PgPool, types::Uuid};

use lms_core::progress::{ScoreRecord, ScoreRow, StudentRef, score_table};
use lms_db::{models::Student, repositories};

use crate::{auth::Identity, error::ApiError, state::ApiState, validation};

use super::{
    model::{CategoryProgress, ProgressReport, StudentPayload},
    progress::{Category, compute_progress},
};

/// Create the student routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/students", get(list_students))
        .route("/students/scores", get(quiz_score_table))
        .route("/students/{id}", get(get_student))
        .route("/students/{id}", put(update_student))
        .route("/students/{id}", delete(delete_student))
        .route("/students/{id}/progress", get(student_progress))
        .route(
            "/students/{id}/progress/{category}",
            get(student_category_progress),
        )
}

/// All students, sorted by display name.
async fn list_students(
    _identity: Identity,
    State(state): State<ApiState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = repositories::student::list(&state.pool)
        .await
        .map_err(ApiError::Database)?;

    if students.is_empty() {
        return Err(ApiError::NotFound("students"));
    }

    Ok(Json(students))
}

/// Quiz-score table: one row per student, cells keyed by quiz id.
///
/// Fail-soft: an unreachable store yields an empty table, not an error.
async fn quiz_score_table(
    _identity: Identity,
    State(state): State<ApiState>,
) -> Json<Vec<ScoreRow>> {
    let table = match load_score_table(&state.pool).await {
        Ok(table) => table,
        Err(error) => {
            tracing::error!("failed to load quiz score table: {error}");
            Vec::new()
        }
    };

    Json(table)
}

async fn load_score_table(pool: &PgPool) -> Result<Vec<ScoreRow>, sqlx::Error> {
    let students = repositories::student::list(pool).await?;
    let records = repositories::score::list_all(pool).await?;

    let students: Vec<StudentRef> = students
        .into_iter()
        .map(|student| StudentRef {
            id: student.id.to_string(),
            name: student.name,
        })
        .collect();
    let records: Vec<ScoreRecord> = records
        .into_iter()
        .map(|record| ScoreRecord {
            student_id: record.student_id.to_string(),
            quiz_id: record.quiz_id.to_string(),
            score: i64::from(record.score),
            question_count: i64::from(record.question_count),
        })
        .collect();

    Ok(score_table(&students, &records))
}

async fn get_student(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Student>, ApiError> {
    let student = repositories::student::get(&state.pool, student_id)
        .await
        .map_err(ApiError::Database)?
        .ok_or(ApiError::NotFound("student"))?;

    Ok(Json(student))
}

async fn update_student(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(student_id): Path<Uuid>,
    Json(payload): Json<StudentPayload>,
) -> Result<StatusCode, ApiError> {
    validation::validate_payload(&payload)?;

    let updated = repositories::student::update(
        &state.pool,
        student_id,
        &payload.name,
        &payload.email,
        &payload.age,
        &payload.birthdate,
        &payload.username,
        &payload.course,
        &payload.gender,
        &payload.status,
    )
    .await
    .map_err(ApiError::Database)?;

    if !updated {
        return Err(ApiError::NotFound("student"));
    }

    Ok(StatusCode::OK)
}

async fn delete_student(
    identity: Identity,
    State(state): State<ApiState>,
    Path(student_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    identity.require_admin()?;

    let deleted = repositories::student::delete(&state.pool, student_id)
        .await
        .map_err(ApiError::Database)?;

    if !deleted {
        return Err(ApiError::NotFound("student"));
    }

    Ok(StatusCode::OK)
}

/// Completion percentages across all four categories for one student.
async fn student_progress(
    _identity: Identity,
    State(state): State<ApiState>,
    Path(student_id): Path<Uuid>,
) -> Json<ProgressReport> {
    Json(ProgressReport {
        courses: compute_progress(&state.pool, student_id, Category::Courses).await,
        videos: compute_progress(&state.pool, student_id, Category::Videos).await,
        quizzes: compute_progress(&state.pool, student_id, Category::Quizzes).await,
        code: compute_progress(&state.pool, student_id, Category::Code).await,
    })
}

/// Completion percentage for one student and one category.
async fn student_category_progress(
    _identity: Identity,
    State(state): State<ApiState>,
    Path((student_id, category)): Path<(Uuid, String)>,
) -> Result<Json<CategoryProgress>, ApiError> {
    let category = Category::parse(&category).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown progress category: '{category}'. Must be one of courses, videos, quizzes, code"
        ))
    })?;

    let percentage = compute_progress(&state.pool, student_id, category).await;

    Ok(Json(CategoryProgress {
        category: category.as_str(),
        percentage,
    }))
}
