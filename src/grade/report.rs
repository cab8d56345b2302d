#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::results::{FeedbackItem, Grade, GradingResult};

#[derive(Tabled)]
/// One table row per criterion
struct FeedbackRow {
    #[tabled(rename = "Category")]
    /// * `category`: category label from the rubric
    category: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: points awarded out of the criterion budget
    grade:    Grade,
    #[tabled(rename = "Feedback")]
    /// * `feedback`: tiered prose feedback
    feedback: String,
}

impl From<&FeedbackItem> for FeedbackRow {
    fn from(item: &FeedbackItem) -> Self {
        Self {
            category: item.category.clone(),
            grade:    item.grade(),
            feedback: item.feedback.clone(),
        }
    }
}

/// Renders the per-criterion results as a boxed table with the total and
/// letter grade in the footer.
pub fn render_table(result: &GradingResult) -> String {
    let rows: Vec<FeedbackRow> = result.feedback.iter().map(FeedbackRow::from).collect();
    let total = result.grade();

    Table::new(rows)
        .with(Panel::header("Grading Overview"))
        .with(Panel::footer(format!(
            "Total: {}/{} ({:.0}%) - Grade: {}",
            result.total_score,
            result.max_score,
            total.percentage(),
            result.overall_grade
        )))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders each criterion's suggestions as a Markdown list.
pub fn render_suggestions(result: &GradingResult) -> String {
    let mut out = String::from("## Suggestions\n");
    for item in &result.feedback {
        out.push_str(&format!("\n### {} ({})\n\n", item.category, item.grade()));
        for suggestion in &item.suggestions {
            out.push_str(&format!("- {suggestion}\n"));
        }
    }
    out
}
