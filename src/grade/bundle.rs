#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, path::Path};

use itertools::Itertools;

use crate::constants::{MARKUP_EXTENSIONS, SCRIPT_EXTENSIONS, STYLESHEET_EXTENSIONS};

/// Read-only view over a submission's files with the lookups scorers need.
#[derive(Debug, Clone, Copy)]
pub struct Bundle<'a> {
    /// Relative path to contents.
    files: &'a BTreeMap<String, String>,
}

impl<'a> Bundle<'a> {
    /// Wraps a path to contents map.
    pub fn new(files: &'a BTreeMap<String, String>) -> Self {
        Self { files }
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the bundle holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All `(path, contents)` pairs in path order.
    pub fn files(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Paths in path order.
    pub fn paths(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.files.keys().map(String::as_str)
    }

    /// Contents of the file at exactly `path`, if present.
    pub fn get(&self, path: &str) -> Option<&'a str> {
        self.files.get(path).map(String::as_str)
    }

    /// Files whose extension is one of `extensions`.
    pub fn with_extension(
        &self,
        extensions: &'static [&'static str],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.files()
            .filter(move |(path, _)| has_extension(path, extensions))
    }

    /// Whether any file has one of `extensions`.
    pub fn any_with_extension(&self, extensions: &'static [&'static str]) -> bool {
        self.with_extension(extensions).next().is_some()
    }

    /// Stylesheet files.
    pub fn stylesheets(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.with_extension(STYLESHEET_EXTENSIONS)
    }

    /// Files that may carry markup.
    pub fn markup(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.with_extension(MARKUP_EXTENSIONS)
    }

    /// Script files.
    pub fn scripts(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.with_extension(SCRIPT_EXTENSIONS)
    }

    /// Contents of every file, newline separated.
    pub fn all_text(&self) -> String {
        join(self.files())
    }

    /// Contents of files matching any of the extension groups, each file once.
    pub fn text_of(&self, groups: &[&'static [&'static str]]) -> String {
        join(
            self.files()
                .filter(|(path, _)| groups.iter().any(|g| has_extension(path, g))),
        )
    }

    /// Line count across all files.
    pub fn total_lines(&self) -> usize {
        self.files.values().map(|c| c.lines().count()).sum()
    }

    /// Character count across all files.
    pub fn total_chars(&self) -> usize {
        self.files.values().map(|c| c.chars().count()).sum()
    }
}

/// Joins file contents with newlines so patterns never span two files.
fn join<'a>(files: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    files.map(|(_, contents)| contents).join("\n")
}

/// Lowercased extension of `path`, if any.
pub fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Whether `path` ends in one of `extensions`.
pub fn has_extension(path: &str, extensions: &[&str]) -> bool {
    extension(path).is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Lowercased file name without directory or extension.
pub fn base_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_ascii_lowercase()
}
