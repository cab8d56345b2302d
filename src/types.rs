#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Project definitions and submission bundles consumed by the grader.

use std::{collections::BTreeMap, fmt, path::Path};

use anyhow::{Context, Result};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Which part of a web application a project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    /// Browser-only project (vanilla or framework).
    #[default]
    Frontend,
    /// Server-only project.
    Backend,
    /// Browser and server in one submission.
    Fullstack,
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stack::Frontend => "frontend",
            Stack::Backend => "backend",
            Stack::Fullstack => "fullstack",
        };
        f.write_str(name)
    }
}

/// One weighted aspect of a project rubric.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct GradingCriterion {
    /// Identifier of the criterion within its project.
    #[builder(getter)]
    pub id:           String,
    /// Category label used to pick a scorer, eg. `Design & UI`.
    #[builder(getter)]
    pub category:     String,
    /// Human readable description of the criterion.
    #[builder(default)]
    #[serde(default)]
    pub description:  String,
    /// Point budget of this criterion.
    #[builder(getter)]
    pub max_points:   u32,
    /// Free-form requirement statements.
    #[builder(default, with = |iter: impl IntoIterator<Item = impl Into<String>>| {
        iter.into_iter().map(Into::into).collect::<Vec<String>>()
    })]
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Describes what is being graded.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct ProjectDefinition {
    /// Catalog identifier of the project, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:           Option<String>,
    /// Display title of the project, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title:        Option<String>,
    /// Stack classification.
    #[builder(default)]
    pub stack:        Stack,
    /// Technology tags, eg. `React`, `Express`.
    #[builder(default, with = |iter: impl IntoIterator<Item = impl Into<String>>| {
        iter.into_iter().map(Into::into).collect::<Vec<String>>()
    })]
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Ordered rubric.
    #[builder(default, with = FromIterator::from_iter)]
    #[serde(default)]
    pub criteria:     Vec<GradingCriterion>,
}

impl ProjectDefinition {
    /// Parses a project definition from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Could not parse project definition JSON")
    }

    /// Reads and parses a project definition from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read project definition {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid project definition in {}", path.display()))
    }

    /// Total points available across all criteria, widened so that no
    /// combination of `u32` budgets can overflow.
    pub fn max_points(&self) -> u64 {
        self.criteria.iter().map(|c| u64::from(c.max_points)).sum()
    }

    /// Whether any technology tag names the given technology, ignoring case.
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(technology))
    }
}

/// A full set of submitted files plus optional links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Relative path to file contents.
    pub files:          BTreeMap<String, String>,
    /// Link to the source repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    /// Link to a live deployment. Carried along, never graded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_url:   Option<String>,
}

impl Submission {
    /// Creates a submission from `(path, contents)` pairs.
    pub fn new<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            files:          files
                .into_iter()
                .map(|(p, c)| (p.into(), c.into()))
                .collect(),
            repository_url: None,
            deployed_url:   None,
        }
    }

    /// Attaches a repository link.
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    /// Attaches a deployment link.
    pub fn with_deployed_url(mut self, url: impl Into<String>) -> Self {
        self.deployed_url = Some(url.into());
        self
    }

    /// Number of files in the bundle.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the bundle has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
