#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, fmt, sync::Arc};

use itertools::Itertools;
use serde::Serialize;

use super::{
    bundle::Bundle,
    scorers::{
        ApiIntegrationScorer, CodeQualityScorer, DatabaseScorer, DesignScorer,
        FunctionalityScorer, GenericScorer, ResponsivenessScorer, SecurityScorer,
    },
};
use crate::types::Stack;

/// The built-in scoring strategies. Also selects the feedback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScorerKind {
    /// Visual design and styling.
    Design,
    /// Interactive behaviour.
    Functionality,
    /// Structure, naming, comments and error handling.
    CodeQuality,
    /// Layout across screen sizes.
    Responsiveness,
    /// Server routes and HTTP handling.
    ApiIntegration,
    /// Authentication, validation and hardening.
    Security,
    /// Persistence layer.
    Database,
    /// Anything not recognised.
    Generic,
}

impl ScorerKind {
    /// Every kind, in display order.
    pub const ALL: [ScorerKind; 8] = [
        ScorerKind::Design,
        ScorerKind::Functionality,
        ScorerKind::CodeQuality,
        ScorerKind::Responsiveness,
        ScorerKind::ApiIntegration,
        ScorerKind::Security,
        ScorerKind::Database,
        ScorerKind::Generic,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            ScorerKind::Design => "Design & UI",
            ScorerKind::Functionality => "Functionality",
            ScorerKind::CodeQuality => "Code Quality",
            ScorerKind::Responsiveness => "Responsiveness",
            ScorerKind::ApiIntegration => "API Integration",
            ScorerKind::Security => "Security",
            ScorerKind::Database => "Database",
            ScorerKind::Generic => "Generic",
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a scorer may look at for one criterion.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    /// The submitted files.
    pub bundle:       Bundle<'a>,
    /// Stack of the project being graded.
    pub stack:        Stack,
    /// Point budget of the criterion.
    pub max_points:   f64,
    /// Requirement statements of the criterion.
    pub requirements: &'a [String],
}

/// A heuristic that estimates how well a bundle satisfies one criterion.
pub trait CategoryScorer: Send + Sync {
    /// Which feedback table describes this scorer's results.
    fn kind(&self) -> ScorerKind {
        ScorerKind::Generic
    }

    /// Returns a score in `[0, input.max_points]`.
    fn score(&self, input: &ScoreInput<'_>) -> f64;
}

/// Normalises a category label: trimmed, lowercased, inner whitespace
/// collapsed to single spaces.
pub fn normalize_category(category: &str) -> String {
    category.split_whitespace().join(" ").to_lowercase()
}

/// Named strategies keyed by normalised category, with a fallback for
/// everything else.
#[derive(Clone)]
pub struct ScorerRegistry {
    /// Normalised name to scorer.
    by_name:  HashMap<String, Arc<dyn CategoryScorer>>,
    /// Used for names that were never registered.
    fallback: Arc<dyn CategoryScorer>,
}

impl ScorerRegistry {
    /// A registry that routes every category to `fallback`.
    pub fn with_fallback(fallback: Arc<dyn CategoryScorer>) -> Self {
        Self {
            by_name: HashMap::new(),
            fallback,
        }
    }

    /// Routes each of `names` to `scorer`, replacing earlier registrations.
    pub fn register<I, S>(&mut self, names: I, scorer: Arc<dyn CategoryScorer>) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.by_name
                .insert(normalize_category(name.as_ref()), Arc::clone(&scorer));
        }
        self
    }

    /// Picks the scorer for `category`. Never fails.
    pub fn resolve(&self, category: &str) -> &dyn CategoryScorer {
        match self.by_name.get(&normalize_category(category)) {
            Some(scorer) => scorer.as_ref(),
            None => {
                tracing::debug!(category, "unrecognised category, using generic scorer");
                self.fallback.as_ref()
            }
        }
    }

    /// Registered names grouped by scorer kind, both sorted.
    pub fn names_by_kind(&self) -> Vec<(ScorerKind, Vec<String>)> {
        self.by_name
            .iter()
            .map(|(name, scorer)| (scorer.kind(), name.clone()))
            .into_group_map()
            .into_iter()
            .map(|(kind, names)| (kind, names.into_iter().sorted().collect()))
            .sorted_by_key(|(kind, _)| *kind)
            .collect()
    }
}

impl Default for ScorerRegistry {
    fn default() -> Self {
        let mut registry = Self::with_fallback(Arc::new(GenericScorer));
        registry
            .register(
                [
                    "design",
                    "design & ui",
                    "design and ui",
                    "ui",
                    "ui/ux",
                    "ui & ux",
                    "user interface",
                    "visual design",
                ],
                Arc::new(DesignScorer),
            )
            .register(
                ["functionality", "core functionality", "features", "interactivity"],
                Arc::new(FunctionalityScorer),
            )
            .register(
                ["code quality", "code structure", "clean code", "code organization"],
                Arc::new(CodeQualityScorer),
            )
            .register(
                [
                    "responsiveness",
                    "responsive design",
                    "mobile responsiveness",
                    "mobile friendly",
                ],
                Arc::new(ResponsivenessScorer),
            )
            .register(
                ["api integration", "api", "api design", "rest api", "backend api"],
                Arc::new(ApiIntegrationScorer),
            )
            .register(
                ["security", "authentication", "auth", "auth & security"],
                Arc::new(SecurityScorer),
            )
            .register(
                ["database", "database design", "data persistence", "data modeling"],
                Arc::new(DatabaseScorer),
            );
        registry
    }
}

impl fmt::Debug for ScorerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScorerRegistry")
            .field("names", &self.by_name.keys().sorted().collect::<Vec<_>>())
            .field("fallback", &self.fallback.kind())
            .finish()
    }
}
