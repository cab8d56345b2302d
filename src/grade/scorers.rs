#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The built-in heuristic scorers.
//!
//! Every scorer is an additive partial-credit accumulator: each detected
//! signal adds a fixed fraction of the criterion's points, and the sum is
//! clamped to the budget only once all signals have been counted.

use std::collections::HashSet;

use super::{
    bundle::{Bundle, base_name, has_extension},
    patterns::PATTERNS,
    registry::{CategoryScorer, ScoreInput, ScorerKind},
};
use crate::{
    constants::{
        FORMATTED_FILE_RATIO, FORMATTED_LINE_RATIO, HTTP_METHODS, HTTP_METHODS_MIN,
        MARKUP_EXTENSIONS, MODERN_SYNTAX_MIN, MODERN_SYNTAX_TOKENS, SCRIPT_EXTENSIONS,
        STYLESHEET_EXTENSIONS,
    },
    types::Stack,
};

/// Running total for one criterion.
struct Credit {
    /// Which scorer is accumulating, for logging.
    kind:   ScorerKind,
    /// Point budget.
    max:    f64,
    /// Points earned so far, possibly above `max`.
    earned: f64,
}

impl Credit {
    /// Starts at zero.
    fn new(kind: ScorerKind, max: f64) -> Self {
        Self {
            kind,
            max,
            earned: 0.0,
        }
    }

    /// Adds `weight` of the budget when `detected`.
    fn award(&mut self, signal: &'static str, detected: bool, weight: f64) -> &mut Self {
        if detected {
            self.earned += self.max * weight;
            tracing::trace!(scorer = %self.kind, signal, weight, "signal detected");
        }
        self
    }

    /// Adds an arbitrary fraction of the budget.
    fn award_fraction(&mut self, signal: &'static str, fraction: f64) -> &mut Self {
        if fraction > 0.0 {
            self.earned += self.max * fraction;
            tracing::trace!(scorer = %self.kind, signal, fraction, "partial signal detected");
        }
        self
    }

    /// Clamps to `[0, max]`.
    fn total(&self) -> f64 {
        self.earned.clamp(0.0, self.max.max(0.0))
    }
}

/// Whether any single markup file uses at least three distinct semantic tags.
fn has_semantic_markup(bundle: &Bundle<'_>) -> bool {
    bundle.markup().any(|(_, contents)| {
        PATTERNS
            .semantic_tags
            .iter()
            .filter(|tag| tag.is_match(contents))
            .count()
            >= 3
    })
}

/// Scores visual design: stylesheets, layout systems, breakpoints, palette,
/// motion and semantic markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignScorer;

impl CategoryScorer for DesignScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Design
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let bundle = &input.bundle;
        let styles = bundle.text_of(&[STYLESHEET_EXTENSIONS, MARKUP_EXTENSIONS]);

        Credit::new(self.kind(), input.max_points)
            .award("stylesheet", bundle.any_with_extension(STYLESHEET_EXTENSIONS), 0.20)
            .award("flexbox", PATTERNS.flexbox.is_match(&styles), 0.15)
            .award("grid", PATTERNS.grid.is_match(&styles), 0.15)
            .award("media queries", PATTERNS.media_query.is_match(&styles), 0.20)
            .award("colors", PATTERNS.color.find_iter(&styles).count() > 3, 0.10)
            .award("backgrounds", PATTERNS.background.find_iter(&styles).count() > 2, 0.10)
            .award("motion", PATTERNS.motion.is_match(&styles), 0.10)
            .award("semantic html", has_semantic_markup(bundle), 0.10)
            .total()
    }
}

/// Scores interactive behaviour: scripts, events, validation, API calls,
/// modern syntax and, for backends, routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionalityScorer;

impl CategoryScorer for FunctionalityScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Functionality
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let bundle = &input.bundle;
        let code = bundle.text_of(&[SCRIPT_EXTENSIONS, MARKUP_EXTENSIONS]);
        let modern = MODERN_SYNTAX_TOKENS
            .iter()
            .filter(|token| code.contains(*token))
            .count();

        Credit::new(self.kind(), input.max_points)
            .award("scripts", bundle.any_with_extension(SCRIPT_EXTENSIONS), 0.20)
            .award("event handling", PATTERNS.event.is_match(&code), 0.25)
            .award("validation", PATTERNS.validation.is_match(&code), 0.20)
            .award("api calls", PATTERNS.api_call.is_match(&code), 0.20)
            .award("modern syntax", modern >= MODERN_SYNTAX_MIN, 0.15)
            .award(
                "routes",
                input.stack == Stack::Backend && PATTERNS.route.is_match(&code),
                0.30,
            )
            .total()
    }
}

/// Whether a path segment follows a conventional naming style.
///
/// Lowercase, camelCase, kebab-case and snake_case are accepted everywhere;
/// PascalCase only for script files, where components live.
fn is_conventional_segment(segment: &str, is_script: bool) -> bool {
    let Some(first) = segment.chars().next() else {
        return false;
    };
    let allowed = segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    let leading_ok = !first.is_ascii_uppercase() || is_script;
    allowed && leading_ok
}

/// Whether every path in the bundle is conventionally named and free of spaces.
fn has_consistent_naming(bundle: &Bundle<'_>) -> bool {
    bundle.paths().all(|path| {
        let is_script = has_extension(path, SCRIPT_EXTENSIONS);
        let segments: Vec<&str> = path.split('/').collect();
        let last = segments.len().saturating_sub(1);
        segments
            .iter()
            .enumerate()
            .all(|(i, segment)| is_conventional_segment(segment, is_script && i == last))
    })
}

/// Whether at least [`FORMATTED_LINE_RATIO`] of the file's lines are indented
/// or blank.
fn is_well_formatted(contents: &str) -> bool {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.is_empty() {
        return false;
    }
    let shaped = lines
        .iter()
        .filter(|line| line.trim().is_empty() || line.starts_with([' ', '\t']))
        .count();
    shaped as f64 / lines.len() as f64 >= FORMATTED_LINE_RATIO
}

/// Scores code hygiene: project size, comments, naming, formatting and error
/// handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeQualityScorer;

impl CategoryScorer for CodeQualityScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::CodeQuality
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let bundle = &input.bundle;
        let text = bundle.all_text();
        let formatted = bundle
            .files()
            .filter(|(_, contents)| is_well_formatted(contents))
            .count();
        let formatted_share = if bundle.is_empty() {
            0.0
        } else {
            formatted as f64 / bundle.len() as f64
        };

        Credit::new(self.kind(), input.max_points)
            .award("file count", bundle.len() >= 3, 0.20)
            .award("comments", PATTERNS.comment.is_match(&text), 0.20)
            .award("naming", has_consistent_naming(bundle), 0.20)
            .award("formatting", formatted_share >= FORMATTED_FILE_RATIO, 0.20)
            .award("error handling", PATTERNS.error_handling.is_match(&text), 0.20)
            .total()
    }
}

/// Scores layout across screen sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponsivenessScorer;

impl CategoryScorer for ResponsivenessScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Responsiveness
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let text = input.bundle.all_text();

        Credit::new(self.kind(), input.max_points)
            .award("viewport meta", PATTERNS.viewport.is_match(&text), 0.30)
            .award("media queries", PATTERNS.media_query.is_match(&text), 0.40)
            .award("flexible units", PATTERNS.flexible_unit.is_match(&text), 0.30)
            .total()
    }
}

/// Number of distinct HTTP methods mentioned in `code`.
fn distinct_http_methods(code: &str) -> usize {
    HTTP_METHODS
        .iter()
        .filter(|(call, token)| {
            code.contains(call)
                || code
                    .match_indices(token)
                    .any(|(at, _)| is_whole_word(code, at, token.len()))
        })
        .count()
}

/// Whether `code[at..at + len]` is not part of a longer identifier.
fn is_whole_word(code: &str, at: usize, len: usize) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let before = code[..at].chars().next_back().is_none_or(|c| !is_ident(c));
    let after = code[at + len..].chars().next().is_none_or(|c| !is_ident(c));
    before && after
}

/// Scores server routes and HTTP handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiIntegrationScorer;

impl CategoryScorer for ApiIntegrationScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::ApiIntegration
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let code = input.bundle.text_of(&[SCRIPT_EXTENSIONS]);

        Credit::new(self.kind(), input.max_points)
            .award("routes", PATTERNS.route.is_match(&code), 0.40)
            .award("http methods", distinct_http_methods(&code) >= HTTP_METHODS_MIN, 0.30)
            .award("http errors", PATTERNS.http_error.is_match(&code), 0.30)
            .total()
    }
}

/// Scores authentication, input sanitisation and security middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityScorer;

impl CategoryScorer for SecurityScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Security
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let text = input.bundle.all_text();

        Credit::new(self.kind(), input.max_points)
            .award("authentication", PATTERNS.auth.is_match(&text), 0.40)
            .award("sanitization", PATTERNS.sanitize.is_match(&text), 0.30)
            .award("middleware", PATTERNS.security_middleware.is_match(&text), 0.30)
            .total()
    }
}

/// Scores the persistence layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseScorer;

impl CategoryScorer for DatabaseScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Database
    }

    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let text = input.bundle.all_text();

        Credit::new(self.kind(), input.max_points)
            .award("connection", PATTERNS.db_connection.is_match(&text), 0.30)
            .award("schema", PATTERNS.db_schema.is_match(&text), 0.40)
            .award("crud", PATTERNS.db_crud.is_match(&text), 0.30)
            .total()
    }
}

/// Fraction of requirements with at least one word present in `haystack`,
/// which must already be lowercase.
fn requirement_coverage(requirements: &[String], haystack: &str) -> f64 {
    if requirements.is_empty() {
        return 0.0;
    }
    let matched = requirements
        .iter()
        .filter(|req| {
            let words: HashSet<String> = req.split_whitespace().map(str::to_lowercase).collect();
            words.iter().any(|word| haystack.contains(word.as_str()))
        })
        .count();
    matched as f64 / requirements.len() as f64
}

/// Fallback: rewards bulk and requirement keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericScorer;

impl CategoryScorer for GenericScorer {
    fn score(&self, input: &ScoreInput<'_>) -> f64 {
        let bundle = &input.bundle;
        let haystack = bundle.all_text().to_lowercase();

        Credit::new(self.kind(), input.max_points)
            .award("line count", bundle.total_lines() > 50, 0.30)
            .award("character count", bundle.total_chars() > 2000, 0.30)
            .award_fraction(
                "requirement keywords",
                requirement_coverage(input.requirements, &haystack) * 0.40,
            )
            .total()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn files(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect()
    }

    fn score(
        scorer: &dyn CategoryScorer,
        files: &BTreeMap<String, String>,
        stack: Stack,
        requirements: &[String],
    ) -> f64 {
        scorer.score(&ScoreInput {
            bundle: Bundle::new(files),
            stack,
            max_points: 100.0,
            requirements,
        })
    }

    #[test]
    fn design_sums_then_clamps() {
        let css = "body { display: flex; display: grid; color: red; color: blue; \
                   color: green; color: black; background: red; background: blue; \
                   background-color: white; transition: all 1s; }\n@media (max-width: 600px) {}";
        let html = "<header></header><nav></nav><main></main><footer></footer>";
        let f = files(&[("style.css", css), ("index.html", html)]);

        let s = score(&DesignScorer, &f, Stack::Frontend, &[]);
        assert!((s - 100.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn design_without_stylesheets_scores_zero() {
        let f = files(&[("notes.txt", "plain")]);
        assert_eq!(score(&DesignScorer, &f, Stack::Frontend, &[]), 0.0);
    }

    #[test]
    fn semantic_tags_must_share_a_file() {
        let f = files(&[
            ("a.html", "<header></header><nav></nav>"),
            ("b.html", "<main></main>"),
        ]);
        assert!(!has_semantic_markup(&Bundle::new(&f)));

        let f = files(&[("a.html", "<header></header><nav></nav><main class=\"x\"></main>")]);
        assert!(has_semantic_markup(&Bundle::new(&f)));
    }

    #[test]
    fn routes_only_count_for_backends() {
        let f = files(&[("server.js", "app.get('/', (req, res) => res.send('ok'));")]);
        let frontend = score(&FunctionalityScorer, &f, Stack::Frontend, &[]);
        let backend = score(&FunctionalityScorer, &f, Stack::Backend, &[]);
        assert!((backend - frontend - 30.0).abs() < 1e-9);
    }

    #[test]
    fn naming_allows_pascal_case_components_only() {
        let ok = files(&[("src/App.js", ""), ("src/user-card.css", ""), ("package.json", "")]);
        assert!(has_consistent_naming(&Bundle::new(&ok)));

        let spaced = files(&[("my file.js", "")]);
        assert!(!has_consistent_naming(&Bundle::new(&spaced)));

        let capital_dir = files(&[("Src/app.js", "")]);
        assert!(!has_consistent_naming(&Bundle::new(&capital_dir)));
    }

    #[test]
    fn formatting_counts_indented_and_blank_lines() {
        assert!(is_well_formatted("fn a() {\n    b();\n}\n"));
        assert!(!is_well_formatted("a\nb\nc\nd\n"));
        assert!(!is_well_formatted(""));
    }

    #[test]
    fn http_methods_are_counted_once_each() {
        let code = "router.get('/'); router.post('/'); method: 'GET'";
        assert_eq!(distinct_http_methods(code), 2);
        assert_eq!(distinct_http_methods("const TARGET = 1; PUTS"), 0);
        assert_eq!(distinct_http_methods("app.put('/x'); fetch(u, { method: 'DELETE' })"), 2);
    }

    #[test]
    fn api_scorer_rewards_explicit_error_statuses() {
        let code = "app.get('/a', h); app.post('/a', h); app.delete('/a', h);\n\
                    res.status(404).json({ error: 'missing' });";
        let f = files(&[("server.js", code)]);
        assert!((score(&ApiIntegrationScorer, &f, Stack::Backend, &[]) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn generic_scores_requirement_keywords() {
        let f = files(&[("notes.md", "We built a Weather dashboard")]);
        let reqs = vec!["Weather forecast".to_string(), "Unit toggle".to_string()];
        let s = score(&GenericScorer, &f, Stack::Frontend, &reqs);
        assert!((s - 20.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn generic_without_requirements_uses_bulk_only() {
        let body = "x\n".repeat(60);
        let f = files(&[("a.txt", body.as_str())]);
        assert!((score(&GenericScorer, &f, Stack::Frontend, &[]) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn security_and_database_detect_common_libraries() {
        let f = files(&[(
            "server.js",
            "const jwt = require('jsonwebtoken');\nconst helmet = require('helmet');\n\
             const { body } = require('express-validator');\nconst mongoose = require('mongoose');\n\
             const User = mongoose.model('User', new Schema({}));\nUser.findOne({});",
        )]);
        assert!((score(&SecurityScorer, &f, Stack::Backend, &[]) - 100.0).abs() < 1e-9);
        assert!((score(&DatabaseScorer, &f, Stack::Backend, &[]) - 100.0).abs() < 1e-9);
    }
}
