//! Error types for bunch-git

use std::path::PathBuf;

/// Result type for bunch-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bunch-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] bunch_fs::Error),

    #[error("Repository at {path} has no working tree")]
    BareRepository { path: PathBuf },

    #[error("Path {path} is outside the working tree {workdir}")]
    OutsideWorkTree { path: PathBuf, workdir: PathBuf },
}
