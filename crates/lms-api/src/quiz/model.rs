use serde::Deserialize;
use sqlx::types::Uuid;
use validator::Validate;

/// Quiz publish payload
#[derive(Debug, Deserialize, Validate)]
pub struct QuizPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub instruction: String,
    /// Course the quiz belongs to, if any
    pub course_id: Option<Uuid>,
    #[validate(range(min = 1, message = "You must have atleast 1 question"))]
    pub question_count: i32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// "multiple_choice" or "true_false"
    #[validate(custom(function = validate_kind))]
    pub kind: String,
    /// Question payloads, shape owned by the quiz editor
    pub questions: serde_json::Value,
}

fn default_difficulty() -> String {
    "normal".to_string()
}

fn validate_kind(kind: &str) -> Result<(), validator::ValidationError> {
    if kind == "multiple_choice" || kind == "true_false" {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("kind");
        error.message = Some("Quiz kind must be multiple_choice or true_false".into());
        Err(error)
    }
}

/// Score submission payload for the calling student
#[derive(Debug, Deserialize, Validate)]
pub struct ScorePayload {
    #[validate(range(min = 0, message = "Score can not be negative"))]
    pub score: i32,
    #[validate(range(min = 1, message = "Question count must be atleast 1"))]
    pub question_count: i32,
}
