use serde::Deserialize;
use validator::Validate;

/// Code challenge publish payload
#[derive(Debug, Deserialize, Validate)]
pub struct CodeChallengePayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Language is required"))]
    pub language: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Correct output is required"))]
    pub expected_output: String,
    #[validate(length(min = 1, message = "Thumbnail is required"))]
    pub image_url: String,
}
