use serde::Deserialize;
use validator::Validate;

/// Course create/update payload
#[derive(Debug, Deserialize, Validate)]
pub struct CoursePayload {
    #[validate(length(min = 1, message = "Course name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Course description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Course image is required"))]
    pub image_url: String,
}
