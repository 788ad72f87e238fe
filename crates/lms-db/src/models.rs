use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course model - top-level unit of published content, owns ordered topics
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    /// Unique course identifier
    pub id: Uuid,
    /// Course name (max 255 chars for optimal indexing)
    pub name: String,
    /// Course description (TEXT for longer content)
    pub description: String,
    /// Cover image URL
    pub image_url: String,
    /// Instructor who created the course (external auth-provider id)
    pub owner_id: Uuid,
    /// Soft-delete flag; archived courses are excluded from default listings
    pub is_archived: bool,
    /// When the course was created
    pub created_at: DateTime<Utc>,
    /// When the course was last updated
    pub updated_at: DateTime<Utc>,
}

/// Topic model - one ordered unit of course content ("module" in legacy data)
///
/// `number` is the topic's position within its course, stored as nullable
/// text because legacy imports carry it as a number, a string, or not at
/// all. New writes always store the decimal rendering of a positive
/// integer; `lms_core::ordering` owns the coercion rules.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    /// Unique topic identifier
    pub id: Uuid,
    /// Course this topic belongs to (indexed for fast lookups)
    pub course_id: Uuid,
    /// Loosely-typed position within the course
    pub number: Option<String>,
    /// Topic name (max 255 chars for optimal indexing)
    pub name: String,
    /// Topic body content (TEXT for longer content)
    pub content: String,
    /// Illustration image URLs, at least one on creation
    pub image_urls: Vec<String>,
    /// Instructor who created the topic
    pub owner_id: Uuid,
    /// When the topic was created
    pub created_at: DateTime<Utc>,
    /// When the topic was last updated
    pub updated_at: DateTime<Utc>,
}

/// Course listing row: course fields plus its topic count
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CourseSummary {
    /// Unique course identifier
    pub id: Uuid,
    /// Course name
    pub name: String,
    /// Course description
    pub description: String,
    /// Cover image URL
    pub image_url: String,
    /// Instructor who created the course
    pub owner_id: Uuid,
    /// Soft-delete flag
    pub is_archived: bool,
    /// When the course was created
    pub created_at: DateTime<Utc>,
    /// When the course was last updated
    pub updated_at: DateTime<Utc>,
    /// Number of topics the course currently has
    pub topic_count: i64,
}

/// Video lecture model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Video {
    /// Unique video identifier
    pub id: Uuid,
    /// Video name (max 255 chars for optimal indexing)
    pub name: String,
    /// Video description (TEXT for longer content)
    pub description: String,
    /// Playback URL, local upload or external
    pub video_url: String,
    /// Thumbnail image URL
    pub thumbnail_url: String,
    /// Upload method, "local" or "youtube"
    pub method: String,
    /// Instructor who published the video
    pub owner_id: Uuid,
    /// Soft-delete flag
    pub is_archived: bool,
    /// When the video was published
    pub created_at: DateTime<Utc>,
}

/// Quiz model - question set attached to a course
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quiz {
    /// Unique quiz identifier
    pub id: Uuid,
    /// Quiz title (max 255 chars for optimal indexing)
    pub title: String,
    /// Instructions shown before the quiz starts
    pub instruction: String,
    /// Course the quiz belongs to, if any
    pub course_id: Option<Uuid>,
    /// Number of questions in the quiz
    pub question_count: i32,
    /// Difficulty label, free-form
    pub difficulty: String,
    /// Quiz kind, "multiple_choice" or "true_false"
    pub kind: String,
    /// Question payloads (JSONB; shape owned by the quiz editor)
    pub questions: serde_json::Value,
    /// Instructor who published the quiz
    pub owner_id: Uuid,
    /// Soft-delete flag
    pub is_archived: bool,
    /// When the quiz was published
    pub created_at: DateTime<Utc>,
}

/// Code challenge model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CodeChallenge {
    /// Unique challenge identifier
    pub id: Uuid,
    /// Challenge title (max 255 chars for optimal indexing)
    pub title: String,
    /// Target programming language
    pub language: String,
    /// Problem statement (TEXT for longer content)
    pub description: String,
    /// Expected program output used for checking submissions
    pub expected_output: String,
    /// Thumbnail image URL
    pub image_url: String,
    /// Instructor who published the challenge
    pub owner_id: Uuid,
    /// Soft-delete flag
    pub is_archived: bool,
    /// When the challenge was published
    pub created_at: DateTime<Utc>,
}

/// Student model - profile mirrored from the external auth provider
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    /// External auth-provider identity
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Profile picture URL
    pub profile_url: String,
    /// Age, kept as free text (provider-supplied)
    pub age: String,
    /// Birthdate, kept as free text (provider-supplied)
    pub birthdate: String,
    /// Enrolled course of study
    pub course: String,
    /// Section/block label
    pub block: String,
    /// Gender, free text
    pub gender: String,
    /// School-issued student number
    pub student_number: String,
    /// Login username
    pub username: String,
    /// Enrollment status label
    pub status: String,
    /// When the profile row was created
    pub created_at: DateTime<Utc>,
}

/// Recorded quiz attempt, one per (student, quiz)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizScore {
    /// Unique identifier
    pub id: Uuid,
    /// Student the score belongs to (indexed)
    pub student_id: Uuid,
    /// Quiz the score was recorded for (indexed, unique with student_id)
    pub quiz_id: Uuid,
    /// Questions answered correctly
    pub score: i32,
    /// Total questions in the quiz at attempt time
    pub question_count: i32,
    /// When the attempt was recorded
    pub created_at: DateTime<Utc>,
}
