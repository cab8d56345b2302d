#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::LazyLock;

use anyhow::{Context, Result};

use super::{
    bundle::Bundle,
    feedback::synthesize,
    registry::{ScoreInput, ScorerRegistry},
    requirements::check_requirements,
    results::{FeedbackItem, GradingResult, LetterGrade},
    validate::validate_submission,
};
use crate::{
    error::GradingError,
    types::{ProjectDefinition, Submission},
};

/// Rounds to two decimals for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores submissions against a project's rubric using a scorer registry.
#[derive(Debug, Clone, Default)]
pub struct Grader {
    /// Category to scorer routing.
    registry: ScorerRegistry,
}

impl Grader {
    /// A grader using `registry` for category routing.
    pub fn new(registry: ScorerRegistry) -> Self {
        Self { registry }
    }

    /// The registry in use.
    pub fn registry(&self) -> &ScorerRegistry {
        &self.registry
    }

    /// Grades `submission` against `project`.
    ///
    /// Criterion scores are summed, scaled by the requirement multiplier and
    /// clamped to the project's total points. Only input validation can fail.
    pub fn grade(
        &self,
        project: &ProjectDefinition,
        submission: &Submission,
    ) -> Result<GradingResult, GradingError> {
        validate_submission(submission)?;

        let bundle = Bundle::new(&submission.files);
        let mut raw_total = 0.0;
        let mut feedback = Vec::with_capacity(project.criteria.len());

        for criterion in &project.criteria {
            let scorer = self.registry.resolve(&criterion.category);
            let max_points = f64::from(criterion.max_points);
            let input = ScoreInput {
                bundle,
                stack: project.stack,
                max_points,
                requirements: &criterion.requirements,
            };
            let raw = scorer.score(&input).clamp(0.0, max_points);
            let (tier, text) = synthesize(scorer.kind(), raw, max_points);
            let score = round2(raw);

            tracing::debug!(
                criterion = %criterion.id,
                category = %criterion.category,
                scorer = %scorer.kind(),
                score,
                max_points,
                ?tier,
                "criterion scored"
            );

            raw_total += score;
            feedback.push(
                FeedbackItem::builder()
                    .category(criterion.category.clone())
                    .score(score)
                    .max_score(max_points)
                    .feedback(text.feedback)
                    .suggestions(text.suggestions.iter().copied())
                    .build(),
            );
        }

        let check = check_requirements(project, &bundle);
        let max_score = project.max_points();
        let total = (raw_total * check.multiplier).clamp(0.0, max_score as f64);
        let percentage = if max_score > 0 {
            total / max_score as f64 * 100.0
        } else {
            0.0
        };
        let overall_grade = LetterGrade::from_percentage(percentage);

        tracing::info!(
            files = bundle.len(),
            raw_total,
            multiplier = check.multiplier,
            total,
            max_score,
            grade = %overall_grade,
            "submission graded"
        );

        Ok(GradingResult {
            total_score: total.round() as u64,
            max_score,
            feedback,
            overall_grade,
        })
    }
}

/// Grader with the built-in registry, shared by the free functions.
static DEFAULT_GRADER: LazyLock<Grader> = LazyLock::new(Grader::default);

/// Grades `submission` against `project` with the built-in scorers.
pub fn grade_project(
    project: &ProjectDefinition,
    submission: &Submission,
) -> Result<GradingResult, GradingError> {
    DEFAULT_GRADER.grade(project, submission)
}

/// Runs [`grade_project`] on the blocking pool and awaits its result.
///
/// Dropping the returned future discards the result; grading has no side
/// effects to undo. A [`GradingError`] can be recovered with
/// `err.downcast_ref::<GradingError>()`.
pub async fn grade_project_async(
    project: ProjectDefinition,
    submission: Submission,
) -> Result<GradingResult> {
    let result = tokio::task::spawn_blocking(move || grade_project(&project, &submission))
        .await
        .context("Grading task did not complete")?;
    Ok(result?)
}
