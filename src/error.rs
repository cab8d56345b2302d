#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Reasons a submission is refused before any scoring happens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GradingError {
    /// The submission did not contain any files.
    #[error("No files were submitted. Add your project files and submit again.")]
    InvalidSubmission,
    /// The repository link is not a `https://github.com/<owner>/<repo>` URL.
    #[error(
        "`{0}` is not a valid repository URL. Expected something like \
         https://github.com/<owner>/<repo>."
    )]
    InvalidRepositoryUrl(String),
}
