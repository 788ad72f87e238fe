//! Core domain logic for the course-management platform.
//!
//! This crate holds the parts of the system that are pure computation: topic
//! ordering (number coercion, renumbering, drift detection) and student
//! progress aggregation (completion percentages, quiz-score tables). There
//! is no I/O here, so everything is directly unit-testable.

pub mod ordering;
pub mod progress;
