//! Progress aggregation over the viewed-record tables.
//!
//! Each category compares the student's viewed set against the non-archived
//! resource population. Aggregation is fail-soft: a storage error degrades
//! the metric to 0% instead of failing the dashboard request.

use std::collections::HashSet;

use sqlx::{PgPool, types::Uuid};

use lms_core::progress::completion_percentage;
use lms_db::repositories;

use crate::metrics;

/// The four tracked resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Counted at topic granularity across non-archived courses.
    Courses,
    Videos,
    Quizzes,
    Code,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Courses, Self::Videos, Self::Quizzes, Self::Code];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Videos => "videos",
            Self::Quizzes => "quizzes",
            Self::Code => "code",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "courses" => Some(Self::Courses),
            "videos" => Some(Self::Videos),
            "quizzes" => Some(Self::Quizzes),
            "code" => Some(Self::Code),
            _ => None,
        }
    }
}

/// Completion percentage for one student and category, fail-soft.
pub async fn compute_progress(pool: &PgPool, student_id: Uuid, category: Category) -> f64 {
    match category_progress(pool, student_id, category).await {
        Ok(percentage) => percentage,
        Err(error) => {
            tracing::error!(
                "failed to compute {} progress for student {student_id}: {error}",
                category.as_str()
            );
            metrics::record_progress_fallback(category.as_str());
            0.0
        }
    }
}

async fn category_progress(
    pool: &PgPool,
    student_id: Uuid,
    category: Category,
) -> Result<f64, sqlx::Error> {
    let (total, viewed) = match category {
        Category::Courses => {
            // The displayed unit is topics. A topic counts as viewed through
            // its own record or through the legacy course-level record,
            // which marks every topic of that course.
            let topics = repositories::topic::ids_by_published_course(pool).await?;
            let viewed_courses: HashSet<Uuid> = repositories::viewed::course_ids(pool, student_id)
                .await?
                .into_iter()
                .collect();
            let viewed_topics: HashSet<Uuid> = repositories::viewed::topic_ids(pool, student_id)
                .await?
                .into_iter()
                .collect();

            let viewed = topics
                .iter()
                .filter(|(course_id, topic_id)| {
                    viewed_courses.contains(course_id) || viewed_topics.contains(topic_id)
                })
                .count();
            (topics.len(), viewed)
        }
        Category::Videos => {
            let published = repositories::video::published_ids(pool).await?;
            let viewed_ids: HashSet<Uuid> = repositories::viewed::video_ids(pool, student_id)
                .await?
                .into_iter()
                .collect();
            count_viewed(&published, &viewed_ids)
        }
        Category::Quizzes => {
            let published = repositories::quiz::published_ids(pool).await?;
            let viewed_ids: HashSet<Uuid> = repositories::viewed::quiz_ids(pool, student_id)
                .await?
                .into_iter()
                .collect();
            count_viewed(&published, &viewed_ids)
        }
        Category::Code => {
            let published = repositories::code::published_ids(pool).await?;
            let viewed_ids: HashSet<Uuid> = repositories::viewed::code_ids(pool, student_id)
                .await?
                .into_iter()
                .collect();
            count_viewed(&published, &viewed_ids)
        }
    };

    Ok(completion_percentage(viewed, total))
}

fn count_viewed(published: &[Uuid], viewed_ids: &HashSet<Uuid>) -> (usize, usize) {
    let viewed = published.iter().filter(|id| viewed_ids.contains(id)).count();
    (published.len(), viewed)
}
