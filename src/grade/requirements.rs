#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use serde::Serialize;

use super::{
    bundle::{Bundle, base_name},
    patterns::PATTERNS,
};
use crate::{
    constants::{
        BACKEND_REQUIRED_FILES, BACKEND_STRUCTURE_PENALTY, EMPTY_FILE_FLOOR,
        FRONTEND_STRUCTURE_PENALTY, MISSING_FILE_FLOOR, NEAR_EMPTY_CHARS, REACT_REQUIRED_FILES,
        VANILLA_REQUIRED_FILES,
    },
    types::{ProjectDefinition, Stack},
};

/// Breakdown of the penalty applied to a submission's summed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementCheck {
    /// Files the stack expects.
    pub required_files:     Vec<String>,
    /// Required files with neither an exact nor a similar match.
    pub missing_files:      Vec<String>,
    /// Files whose trimmed contents are shorter than the near-empty limit.
    pub empty_files:        Vec<String>,
    /// Factor from the stack's structural check, `1.0` when satisfied.
    pub structural_penalty: f64,
    /// Product of all factors, in `(0, 1]`.
    pub multiplier:         f64,
}

/// Files a submission for `project` is expected to contain.
pub fn required_files(project: &ProjectDefinition) -> Vec<&'static str> {
    let frontend = if project.uses("react") {
        REACT_REQUIRED_FILES
    } else {
        VANILLA_REQUIRED_FILES
    };

    match project.stack {
        Stack::Frontend => frontend.to_vec(),
        Stack::Backend => BACKEND_REQUIRED_FILES.to_vec(),
        Stack::Fullstack => frontend
            .iter()
            .chain(["server.js"].iter())
            .copied()
            .unique()
            .collect(),
    }
}

/// Whether some file shares `required`'s base name.
fn has_similar(bundle: &Bundle<'_>, required: &str) -> bool {
    let wanted = base_name(required);
    bundle.paths().any(|path| base_name(path) == wanted)
}

/// Factor for a stack's structural markers.
fn structural_penalty(stack: Stack, bundle: &Bundle<'_>) -> f64 {
    match stack {
        Stack::Frontend => {
            let has_document = bundle
                .files()
                .any(|(_, c)| PATTERNS.html_document.is_match(c));
            let has_component = bundle
                .files()
                .any(|(_, c)| PATTERNS.react_component.is_match(c));
            if has_document || has_component {
                1.0
            } else {
                FRONTEND_STRUCTURE_PENALTY
            }
        }
        Stack::Backend => {
            if bundle.files().any(|(_, c)| PATTERNS.route.is_match(c)) {
                1.0
            } else {
                BACKEND_STRUCTURE_PENALTY
            }
        }
        Stack::Fullstack => 1.0,
    }
}

/// Checks required files, near-empty files and structural markers, and
/// combines them into one multiplier.
pub fn check_requirements(project: &ProjectDefinition, bundle: &Bundle<'_>) -> RequirementCheck {
    let required = required_files(project);
    let missing: Vec<String> = required
        .iter()
        .filter(|path| bundle.get(path).is_none() && !has_similar(bundle, path))
        .map(|path| path.to_string())
        .collect();

    let mut multiplier = 1.0;
    if !required.is_empty() {
        let missing_ratio = missing.len() as f64 / required.len() as f64;
        multiplier *= (1.0 - missing_ratio).max(MISSING_FILE_FLOOR);
    }

    let empty: Vec<String> = bundle
        .files()
        .filter(|(_, contents)| contents.trim().chars().count() < NEAR_EMPTY_CHARS)
        .map(|(path, _)| path.to_string())
        .collect();
    if !bundle.is_empty() {
        let empty_ratio = empty.len() as f64 / bundle.len() as f64;
        multiplier *= (1.0 - empty_ratio).max(EMPTY_FILE_FLOOR);
    }

    let structural = structural_penalty(project.stack, bundle);
    multiplier *= structural;

    tracing::debug!(
        stack = %project.stack,
        missing = ?missing,
        empty = empty.len(),
        structural,
        multiplier,
        "requirement check"
    );

    RequirementCheck {
        required_files: required.into_iter().map(String::from).collect(),
        missing_files: missing,
        empty_files: empty,
        structural_penalty: structural,
        multiplier,
    }
}
