use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use validator::Validate;

use lms_db::models::Topic;

/// Topic create/update payload
#[derive(Debug, Deserialize, Validate)]
pub struct TopicPayload {
    #[validate(length(min = 1, message = "Topic name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Topic content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Topic images are required"))]
    pub image_urls: Vec<String>,
}

/// Reorder payload: the full id list of a course's topics in their new
/// visual order
#[derive(Debug, Deserialize)]
pub struct ReorderPayload {
    pub topic_ids: Vec<Uuid>,
}

/// Topic as returned by the ordered listing. `number` here is the resolved
/// 1-based position; the loosely-typed stored value never leaves the
/// storage layer.
#[derive(Debug, Clone, Serialize)]
pub struct OrderedTopic {
    pub id: Uuid,
    pub course_id: Uuid,
    pub number: i64,
    pub name: String,
    pub content: String,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderedTopic {
    pub fn from_topic(topic: Topic, position: i64) -> Self {
        Self {
            id: topic.id,
            course_id: topic.course_id,
            number: position,
            name: topic.name,
            content: topic.content,
            image_urls: topic.image_urls,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}
