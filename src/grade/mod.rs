#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Read-only view over submitted files.
pub mod bundle;
/// Aggregation of criterion scores into a graded result.
pub mod engine;
/// Tiered feedback text.
pub mod feedback;
/// Compiled pattern tables.
mod patterns;
/// Category to scorer routing.
pub mod registry;
/// Table and Markdown rendering of results.
pub mod report;
/// Required files, near-empty files and structural checks.
pub mod requirements;
/// Shared grade result types.
pub mod results;
/// Built-in heuristic scorers.
pub mod scorers;
/// Input checks run before grading.
pub mod validate;

pub use bundle::Bundle;
pub use engine::{Grader, grade_project, grade_project_async};
pub use feedback::{Tier, TierText, synthesize};
pub use registry::{CategoryScorer, ScoreInput, ScorerKind, ScorerRegistry, normalize_category};
pub use report::{render_suggestions, render_table};
pub use requirements::{RequirementCheck, check_requirements, required_files};
pub use results::{FeedbackItem, Grade, GradingResult, LetterGrade};
pub use validate::{is_valid_repository_url, validate_submission};
