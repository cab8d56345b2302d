#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A score and the most it could have been
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }

    /// `grade / out_of` as a percentage, `0.0` when nothing was available.
    pub fn percentage(&self) -> f64 {
        if self.out_of > 0.0 {
            self.grade / self.out_of * 100.0
        } else {
            0.0
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}/{:.2}", self.grade, self.out_of)
    }
}

/// Letter grades, worst first so that `>=` reads as "at least".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// Below 50%.
    #[serde(rename = "F")]
    F,
    /// 50% and above.
    #[serde(rename = "D")]
    D,
    /// 55% and above.
    #[serde(rename = "C-")]
    CMinus,
    /// 60% and above.
    #[serde(rename = "C")]
    C,
    /// 65% and above.
    #[serde(rename = "C+")]
    CPlus,
    /// 70% and above.
    #[serde(rename = "B-")]
    BMinus,
    /// 75% and above.
    #[serde(rename = "B")]
    B,
    /// 80% and above.
    #[serde(rename = "B+")]
    BPlus,
    /// 85% and above.
    #[serde(rename = "A-")]
    AMinus,
    /// 90% and above.
    #[serde(rename = "A")]
    A,
    /// 95% and above.
    #[serde(rename = "A+")]
    APlus,
}

/// Lower bounds, best first.
const GRADE_THRESHOLDS: [(f64, LetterGrade); 10] = [
    (95.0, LetterGrade::APlus),
    (90.0, LetterGrade::A),
    (85.0, LetterGrade::AMinus),
    (80.0, LetterGrade::BPlus),
    (75.0, LetterGrade::B),
    (70.0, LetterGrade::BMinus),
    (65.0, LetterGrade::CPlus),
    (60.0, LetterGrade::C),
    (55.0, LetterGrade::CMinus),
    (50.0, LetterGrade::D),
];

impl LetterGrade {
    /// Maps an unrounded percentage to a letter.
    pub fn from_percentage(percentage: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(LetterGrade::F)
    }

    /// The letter as shown to students, eg. `B+`.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and feedback for one criterion.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    /// Category label as written in the rubric.
    #[builder(getter)]
    pub category:    String,
    /// Points awarded, within `[0, max_score]`.
    #[builder(getter)]
    pub score:       f64,
    /// The criterion's point budget.
    #[builder(getter)]
    pub max_score:   f64,
    /// Prose feedback for the achieved tier.
    #[builder(getter)]
    pub feedback:    String,
    /// Actionable next steps.
    #[builder(default, with = |iter: impl IntoIterator<Item = impl Into<String>>| {
        iter.into_iter().map(Into::into).collect::<Vec<String>>()
    })]
    pub suggestions: Vec<String>,
}

impl FeedbackItem {
    /// Score and budget as a [`Grade`].
    pub fn grade(&self) -> Grade {
        Grade::new(self.score, self.max_score)
    }
}

/// The complete report for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// Points awarded after the requirement multiplier, rounded.
    pub total_score:   u64,
    /// Points available across all criteria.
    pub max_score:     u64,
    /// One item per criterion, in rubric order.
    pub feedback:      Vec<FeedbackItem>,
    /// Letter for the unrounded percentage.
    pub overall_grade: LetterGrade,
}

impl GradingResult {
    /// Total and maximum as a [`Grade`].
    pub fn grade(&self) -> Grade {
        Grade::new(self.total_score as f64, self.max_score as f64)
    }
}
