//! Student progress aggregation.
//!
//! Progress is the ratio of viewed resources to total (non-archived)
//! resources in a category, expressed as a 0–100 percentage with two decimal
//! places. The quiz-score table groups every student's recorded scores by
//! quiz, formatted as `"score/total"` cells.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Completion percentage for a resource category.
///
/// Returns `0.0` when `total` is zero (a category with nothing published
/// shows no progress rather than dividing by zero). The result is rounded
/// to two decimals and always lies within `[0, 100]`; `viewed` is clamped
/// to `total` so a stale viewed set can never report more than 100%.
///
/// # Examples
/// ```
/// use lms_core::progress::completion_percentage;
///
/// assert_eq!(completion_percentage(3, 10), 30.00);
/// assert_eq!(completion_percentage(0, 0), 0.00);
/// assert_eq!(completion_percentage(1, 3), 33.33);
/// ```
pub fn completion_percentage(viewed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let viewed = viewed.min(total);
    let raw = (viewed as f64 / total as f64) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// A student as referenced by the score table, identity plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    /// External identity of the student.
    pub id: String,
    /// Display name used for row ordering.
    pub name: String,
}

/// One recorded quiz attempt: how many questions the student got right out
/// of how many the quiz had at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Student the score belongs to.
    pub student_id: String,
    /// Quiz the score was recorded for.
    pub quiz_id: String,
    /// Questions answered correctly.
    pub score: i64,
    /// Total questions in the quiz when the attempt was made.
    pub question_count: i64,
}

/// A row of the quiz-score table: one student and their `quiz id ->
/// "score/total"` cells. Quizzes the student never attempted are absent
/// from the map; the presentation layer renders those as "0/0".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// Student identity.
    pub student_id: String,
    /// Student display name.
    pub name: String,
    /// Formatted score per attempted quiz.
    pub scores: BTreeMap<String, String>,
}

/// Render a score cell as the `"score/total"` string the table displays.
pub fn format_score(score: i64, question_count: i64) -> String {
    format!("{score}/{question_count}")
}

/// Build the quiz-score table for a set of students.
///
/// Every student gets a row, even with no recorded scores (the row then has
/// an empty map). Records for unknown students are dropped. Rows are sorted
/// by display name, ascending, case-insensitive; ties fall back to the raw
/// name and then the id so the order is total.
pub fn score_table(students: &[StudentRef], records: &[ScoreRecord]) -> Vec<ScoreRow> {
    let mut rows: Vec<ScoreRow> = students
        .iter()
        .map(|student| {
            let scores = records
                .iter()
                .filter(|record| record.student_id == student.id)
                .map(|record| {
                    (
                        record.quiz_id.clone(),
                        format_score(record.score, record.question_count),
                    )
                })
                .collect();

            ScoreRow {
                student_id: student.id.clone(),
                name: student.name.clone(),
                scores,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        (a.name.to_lowercase(), &a.name, &a.student_id)
            .cmp(&(b.name.to_lowercase(), &b.name, &b.student_id))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> StudentRef {
        StudentRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn record(student_id: &str, quiz_id: &str, score: i64, total: i64) -> ScoreRecord {
        ScoreRecord {
            student_id: student_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score,
            question_count: total,
        }
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(completion_percentage(0, 0), 0.0);
        assert_eq!(completion_percentage(5, 0), 0.0);
    }

    #[test]
    fn test_percentage_basic() {
        // 10 published quizzes, 3 viewed -> 30.00.
        assert_eq!(completion_percentage(3, 10), 30.0);
        assert_eq!(completion_percentage(10, 10), 100.0);
        assert_eq!(completion_percentage(0, 10), 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        assert_eq!(completion_percentage(1, 3), 33.33);
        assert_eq!(completion_percentage(2, 3), 66.67);
        assert_eq!(completion_percentage(1, 7), 14.29);
    }

    #[test]
    fn test_percentage_bounds_and_monotonicity() {
        let total = 13;
        let mut previous = -1.0;
        for viewed in 0..=total {
            let pct = completion_percentage(viewed, total);
            assert!((0.0..=100.0).contains(&pct));
            assert!(
                pct >= previous,
                "percentage decreased at viewed={viewed}: {previous} -> {pct}"
            );
            previous = pct;
        }
        assert_eq!(previous, 100.0);
    }

    #[test]
    fn test_percentage_clamps_excess_viewed() {
        // Viewed records can outlive a deleted resource.
        assert_eq!(completion_percentage(12, 10), 100.0);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(7, 10), "7/10");
        assert_eq!(format_score(0, 5), "0/5");
    }

    #[test]
    fn test_score_table_groups_by_student_and_quiz() {
        let students = [student("s1", "Ada"), student("s2", "Bo")];
        let records = [
            record("s1", "quiz-a", 7, 10),
            record("s1", "quiz-b", 3, 5),
            record("s2", "quiz-a", 9, 10),
        ];

        let table = score_table(&students, &records);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].name, "Ada");
        assert_eq!(table[0].scores["quiz-a"], "7/10");
        assert_eq!(table[0].scores["quiz-b"], "3/5");
        assert_eq!(table[1].scores["quiz-a"], "9/10");
        assert!(!table[1].scores.contains_key("quiz-b"));
    }

    #[test]
    fn test_score_table_sorts_case_insensitive() {
        let students = [
            student("s1", "zoe"),
            student("s2", "Adam"),
            student("s3", "beth"),
        ];
        let table = score_table(&students, &[]);
        let names: Vec<&str> = table.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Adam", "beth", "zoe"]);
    }

    #[test]
    fn test_score_table_student_without_scores_gets_empty_row() {
        let students = [student("s1", "Ada")];
        let table = score_table(&students, &[]);
        assert_eq!(table.len(), 1);
        assert!(table[0].scores.is_empty());
    }

    #[test]
    fn test_score_table_drops_records_for_unknown_students() {
        let students = [student("s1", "Ada")];
        let records = [record("ghost", "quiz-a", 1, 1)];
        let table = score_table(&students, &records);
        assert!(table[0].scores.is_empty());
    }
}
