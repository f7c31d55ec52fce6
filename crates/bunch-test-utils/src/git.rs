//! Git repository fixtures.
//!
//! All fixtures go through `git2`, so tests do not depend on a `git`
//! binary being installed.

use std::fs;
use std::path::Path;

/// Initialises a real git repository with a local committer identity.
///
/// Realism level: **REAL**, valid git state, empty history.
///
/// # Panics
/// Panics if `git2::Repository::init` or the config writes fail.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    });
    {
        let mut config = repo
            .config()
            .unwrap_or_else(|e| panic!("real_git_repo: failed to open config: {e}"));
        config
            .set_str("user.name", "Test User")
            .unwrap_or_else(|e| panic!("real_git_repo: failed to set user.name: {e}"));
        config
            .set_str("user.email", "test@test.com")
            .unwrap_or_else(|e| panic!("real_git_repo: failed to set user.email: {e}"));
    }
    repo
}

/// Initialises a real git repository and commits every file currently in
/// the working tree.
///
/// Realism level: **REAL WITH HISTORY**, one commit in history.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) -> git2::Repository {
    if fs::read_dir(path).map(|mut d| d.next().is_none()).unwrap_or(true) {
        fs::write(path.join("README.md"), "# Test").unwrap_or_else(|e| {
            panic!("real_git_repo_with_commit: failed to write README.md: {e}")
        });
    }

    let repo = real_git_repo(path);
    {
        let mut index = repo.index().unwrap();
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: add_all failed: {e}"));
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = repo.signature().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap_or_else(|e| panic!("real_git_repo_with_commit: commit failed: {e}"));
    }
    repo
}

/// Message of the commit `HEAD` points at.
///
/// # Panics
/// Panics if `HEAD` cannot be resolved.
pub fn head_message(repo: &git2::Repository) -> String {
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    commit.message().unwrap_or("").to_string()
}

/// Whether `path` (relative to the work tree) is present in `HEAD`'s tree.
///
/// # Panics
/// Panics if `HEAD` cannot be resolved.
pub fn head_contains(repo: &git2::Repository, path: &str) -> bool {
    let tree = repo.head().unwrap().peel_to_tree().unwrap();
    tree.get_path(Path::new(path)).is_ok()
}

/// Content of `path` as committed in `HEAD`.
///
/// # Panics
/// Panics if `HEAD` cannot be resolved or the path is missing.
pub fn head_blob(repo: &git2::Repository, path: &str) -> String {
    let tree = repo.head().unwrap().peel_to_tree().unwrap();
    let entry = tree
        .get_path(Path::new(path))
        .unwrap_or_else(|e| panic!("head_blob: {path} not in HEAD: {e}"));
    let blob = repo.find_blob(entry.id()).unwrap();
    String::from_utf8_lossy(blob.content()).to_string()
}
