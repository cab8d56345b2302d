#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use futures::future::join_all;

use crate::{
    config,
    types::Submission,
    util::{find_files, in_ignored_dir, relative_key},
};

/// Why a file found on disk was left out of the bundle.
#[derive(Debug)]
enum Skipped {
    /// Larger than the configured limit.
    TooLarge(u64),
    /// Not valid UTF-8 text.
    Binary,
}

/// Reads one candidate file, honouring the size limit.
async fn read_candidate(path: &Path, max_bytes: u64) -> Result<std::result::Result<String, Skipped>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Could not stat {}", path.display()))?;
    if metadata.len() > max_bytes {
        return Ok(Err(Skipped::TooLarge(metadata.len())));
    }

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;
    Ok(String::from_utf8(bytes).map_err(|_| Skipped::Binary))
}

impl Submission {
    /// Collects every text file below `root` into a submission.
    ///
    /// Files in ignored directories, files over the size limit and files that
    /// are not UTF-8 are skipped with a warning. Keys are `/`-separated paths
    /// relative to `root`.
    pub async fn load(root: impl AsRef<Path>) -> Result<Self> {
        let cfg = config::get()?;
        Self::load_with(root, cfg.max_files(), cfg.max_file_bytes(), cfg.ignore_dirs()).await
    }

    /// [`Submission::load`] with explicit limits instead of the configured
    /// ones.
    ///
    /// * `max_files`: files kept, the first ones in path order
    /// * `max_bytes`: files larger than this are skipped
    /// * `ignore_dirs`: directory names never descended into
    pub async fn load_with(
        root: impl AsRef<Path>,
        max_files: usize,
        max_bytes: u64,
        ignore_dirs: &[String],
    ) -> Result<Self> {
        let root = root.as_ref();
        ensure!(root.is_dir(), "{} is not a directory", root.display());

        let mut candidates: Vec<(String, PathBuf)> = find_files(root)?
            .into_iter()
            .filter(|path| !in_ignored_dir(root, path, ignore_dirs))
            .filter_map(|path| relative_key(root, &path).map(|key| (key, path)))
            .collect();
        candidates.sort();

        if candidates.len() > max_files {
            tracing::warn!(
                found = candidates.len(),
                limit = max_files,
                "too many files; keeping the first ones in path order"
            );
            candidates.truncate(max_files);
        }

        let reads = candidates
            .iter()
            .map(|(_, path)| read_candidate(path, max_bytes));
        let contents = join_all(reads).await;

        let mut files = Vec::with_capacity(candidates.len());
        for ((key, _), content) in candidates.into_iter().zip(contents) {
            match content? {
                Ok(text) => files.push((key, text)),
                Err(Skipped::TooLarge(size)) => {
                    tracing::warn!(file = %key, size, "skipping file over the size limit")
                }
                Err(Skipped::Binary) => {
                    tracing::warn!(file = %key, "skipping file that is not UTF-8 text")
                }
            }
        }

        tracing::debug!(root = %root.display(), files = files.len(), "submission loaded");
        Ok(Submission::new(files))
    }
}
