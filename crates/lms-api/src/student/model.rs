use serde::{Deserialize, Serialize};
use validator::Validate;

/// Student profile update payload
#[derive(Debug, Deserialize, Validate)]
pub struct StudentPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Birthdate is required"))]
    pub birthdate: String,
    #[validate(length(min = 1, message = "Age is required"))]
    pub age: String,
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Completion percentages across all four resource categories
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub courses: f64,
    pub videos: f64,
    pub quizzes: f64,
    pub code: f64,
}

/// Completion percentage for a single category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgress {
    pub category: &'static str,
    pub percentage: f64,
}
