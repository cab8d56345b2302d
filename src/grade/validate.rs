#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::patterns::PATTERNS;
use crate::{error::GradingError, types::Submission};

/// Whether `url` looks like `https://github.com/<owner>/<repo>`, with an
/// optional trailing slash.
pub fn is_valid_repository_url(url: &str) -> bool {
    PATTERNS.repository_url.is_match(url.trim())
}

/// Refuses submissions that cannot be graded. Blank repository links are
/// treated as absent.
pub fn validate_submission(submission: &Submission) -> Result<(), GradingError> {
    if submission.is_empty() {
        return Err(GradingError::InvalidSubmission);
    }

    match submission.repository_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() && !is_valid_repository_url(url) => {
            Err(GradingError::InvalidRepositoryUrl(url.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_github_repository_links() {
        assert!(is_valid_repository_url("https://github.com/octocat/hello-world"));
        assert!(is_valid_repository_url("https://github.com/octocat/hello-world/"));
        assert!(is_valid_repository_url("https://github.com/my-org/site.v2"));
    }

    #[test]
    fn rejects_other_shapes() {
        for url in [
            "not-a-url",
            "http://github.com/octocat/hello-world",
            "https://gitlab.com/octocat/hello-world",
            "https://github.com/octocat",
            "https://github.com/octocat/hello-world/tree/main",
            "https://github.com/-octocat/repo",
        ] {
            assert!(!is_valid_repository_url(url), "{url}");
        }
    }

    #[test]
    fn empty_bundle_is_refused_first() {
        let submission = Submission::default().with_repository_url("not-a-url");
        assert_eq!(validate_submission(&submission), Err(GradingError::InvalidSubmission));
    }

    #[test]
    fn blank_repository_link_is_ignored() {
        let submission = Submission::new([("index.html", "<html></html>")])
            .with_repository_url("   ");
        assert_eq!(validate_submission(&submission), Ok(()));
    }
}
