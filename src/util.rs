#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// A glob utility function to find every regular file below a directory
///
/// * `root_dir`: the root directory where search starts
pub fn find_files(root_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pattern = root_dir.to_path_buf();
    pattern.push("**");
    pattern.push("*");
    let pattern = pattern
        .to_str()
        .context("Could not convert root_dir to string")?
        .to_string();

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect())
}

/// Whether any directory between `root_dir` and `path` is in `ignore_dirs`
pub fn in_ignored_dir(root_dir: &Path, path: &Path, ignore_dirs: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root_dir) else {
        return false;
    };
    let Some(parent) = relative.parent() else {
        return false;
    };

    parent.components().any(|component| match component {
        Component::Normal(name) => ignore_dirs
            .iter()
            .any(|dir| name.to_str() == Some(dir.as_str())),
        _ => false,
    })
}

/// `path` relative to `root_dir`, joined with `/` on every platform
pub fn relative_key(root_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root_dir).ok()?;
    let parts = relative
        .components()
        .map(|component| match component {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    (!parts.is_empty()).then(|| parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_dirs_match_whole_components() {
        let root = Path::new("/tmp/site");
        let ignore = vec!["node_modules".to_string(), ".git".to_string()];

        assert!(in_ignored_dir(root, &root.join("node_modules/react/index.js"), &ignore));
        assert!(in_ignored_dir(root, &root.join("a/.git/HEAD"), &ignore));
        assert!(!in_ignored_dir(root, &root.join("my_node_modules/x.js"), &ignore));
        assert!(!in_ignored_dir(root, &root.join("node_modules"), &ignore));
    }

    #[test]
    fn keys_use_forward_slashes() {
        let root = Path::new("/tmp/site");
        assert_eq!(
            relative_key(root, &root.join("css").join("style.css")).as_deref(),
            Some("css/style.css")
        );
        assert_eq!(relative_key(root, root), None);
        assert_eq!(relative_key(root, Path::new("/elsewhere/a.js")), None);
    }
}
