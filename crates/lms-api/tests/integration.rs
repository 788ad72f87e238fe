//! Single integration test target; module files live alongside this one.

mod common;

mod auth_tests;
mod course_tests;
mod progress_tests;
mod topic_tests;
