//! # gradewise
//!
//! Heuristic grading of web-development project submissions. A submission
//! (a map of relative paths to file contents plus optional links) is scored
//! against a project's rubric without running any of the submitted code.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment driven settings for the loader and the HTTP service
pub mod config;
/// Pattern tables, extension groups and scoring constants
pub mod constants;
/// Reasons a submission is refused
pub mod error;
/// For all things related to grading
pub mod grade;
/// Reading a submission from a directory
pub mod loader;
/// HTTP surface of the grader
pub mod server;
/// Project definitions and submissions
pub mod types;
/// Utility functions for convenience
pub mod util;

pub use error::GradingError;
pub use grade::{
    Grader, GradingResult, LetterGrade, grade_project, grade_project_async, is_valid_repository_url,
};
pub use types::{GradingCriterion, ProjectDefinition, Stack, Submission};
