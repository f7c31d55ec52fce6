//! Persisting a [`ChangeSet`] as one commit.

use std::path::{Path, PathBuf};

use git2::{Commit, ErrorCode, Repository};

use bunch_fs::NormalizedPath;

use crate::{ChangeKind, ChangeSet, Error, Result};

/// Something that can persist the changes of a switch.
pub trait ChangeRecorder {
    /// Persist `changes` for the repository at `repo_path` under `title`.
    ///
    /// Returns the identifier of the recorded commit, or `None` when there
    /// was nothing to record.
    fn record(
        &self,
        repo_path: &NormalizedPath,
        changes: &ChangeSet,
        title: &str,
    ) -> Result<Option<String>>;
}

/// Records changes by staging them in the git index and committing on `HEAD`.
///
/// Only the paths in the change set are staged; anything else already in
/// the index is committed along with them, as `git commit` would.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRecorder;

impl GitRecorder {
    pub fn new() -> Self {
        Self
    }
}

impl ChangeRecorder for GitRecorder {
    fn record(
        &self,
        repo_path: &NormalizedPath,
        changes: &ChangeSet,
        title: &str,
    ) -> Result<Option<String>> {
        if changes.is_empty() {
            tracing::info!(repo = %repo_path, "No changes to commit");
            return Ok(None);
        }

        let repo = Repository::open(repo_path.to_native())?;
        let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
            path: repo_path.to_native(),
        })?;
        let workdir =
            dunce::canonicalize(workdir).map_err(|e| bunch_fs::Error::io(workdir, e))?;

        let mut index = repo.index()?;
        for change in changes.sorted() {
            let relative = relative_to(&workdir, &change.path.to_native())?;
            match change.kind {
                ChangeKind::Add | ChangeKind::Modify => index.add_path(&relative)?,
                ChangeKind::Remove => index.remove_path(&relative)?,
            }
            tracing::debug!(kind = %change.kind, path = %relative.display(), "Staged");
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        let signature = repo.signature()?;

        let parent = head_commit(&repo)?;
        let parents: Vec<&Commit> = parent.iter().collect();

        let oid = repo.commit(Some("HEAD"), &signature, &signature, title, &tree, &parents)?;
        tracing::info!(commit = %oid, changes = changes.len(), "Recorded switch");

        Ok(Some(oid.to_string()))
    }
}

/// The commit `HEAD` points at, or `None` on an unborn branch.
fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn relative_to(workdir: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(workdir)
        .map(Path::to_path_buf)
        .map_err(|_| Error::OutsideWorkTree {
            path: path.to_path_buf(),
            workdir: workdir.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_strips_workdir() {
        let rel = relative_to(Path::new("/repo"), Path::new("/repo/src/a.txt")).unwrap();
        assert_eq!(rel, PathBuf::from("src/a.txt"));
    }

    #[test]
    fn relative_to_rejects_foreign_path() {
        let err = relative_to(Path::new("/repo"), Path::new("/elsewhere/a.txt")).unwrap_err();
        assert!(matches!(err, Error::OutsideWorkTree { .. }));
    }
}
