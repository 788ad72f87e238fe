use serde::Deserialize;
use validator::Validate;

/// Video publish payload
#[derive(Debug, Deserialize, Validate)]
pub struct VideoPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Video is required"))]
    pub video_url: String,
    #[validate(length(min = 1, message = "Thumbnail is required"))]
    pub thumbnail_url: String,
    /// Upload method, "local" or "youtube"
    #[validate(custom(function = validate_method))]
    pub method: String,
}

fn validate_method(method: &str) -> Result<(), validator::ValidationError> {
    if method == "local" || method == "youtube" {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("method");
        error.message = Some("You need to select an upload method".into());
        Err(error)
    }
}
