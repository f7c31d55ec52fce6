//! Error types for bunch-core

use std::path::PathBuf;

/// Result type for bunch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a switch
///
/// Every variant aborts the run at the point it is raised. Files already
/// rewritten before that point stay as they are.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The branches rule could not be turned into a usable suffix list
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Repository path is missing or not a directory
    #[error("Repository path {path} does not exist or is not a directory")]
    RepositoryPath { path: PathBuf },

    /// An origin or donor path resolved to a directory
    #[error("{path} is a directory; directories cannot carry branch patches")]
    UnsupportedTarget { path: PathBuf },

    /// The branch copy of an origin file already exists
    #[error("Branch copy {path} already exists; refusing to overwrite it")]
    Collision { path: PathBuf },

    /// Internal logic defect
    #[error("Internal invariant violated: {message}")]
    Invariant { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from bunch-fs
    #[error(transparent)]
    Fs(#[from] bunch_fs::Error),

    /// Git error from bunch-git
    #[error(transparent)]
    Git(#[from] bunch_git::Error),
}

/// Reasons a branches rule does not resolve to at least two suffixes
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Branches rule is empty")]
    EmptyRule,

    #[error("Branches rule '{rule}' contains an empty suffix")]
    EmptySuffix { rule: String },

    #[error("Rule history not found at {path}")]
    HistoryMissing { path: PathBuf },

    #[error("Failed to read rule history: {0}")]
    Unreadable(#[source] bunch_fs::Error),

    #[error("Rule history at {path} does not name a current branch")]
    MissingCurrent { path: PathBuf },

    #[error("No stored rule switches to '{target}'")]
    NoMatchingRule { target: String },

    #[error("Only target '{target}' given; nothing to switch")]
    OnlyTarget { target: String },
}
