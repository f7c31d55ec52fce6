//! End-to-end switch: resolve, classify, restore, record

use serde::Serialize;

use bunch_fs::NormalizedPath;
use bunch_git::{ChangeRecorder, ChangeSet};

use crate::classify::classify;
use crate::config::SwitchConfig;
use crate::restore::RestoreEngine;
use crate::rules::{SuffixRule, resolve};
use crate::{Error, Result};

/// Outcome of a switch run
#[derive(Debug, Clone, Serialize)]
pub struct SwitchReport {
    /// The resolved rule, origin first
    pub rule: SuffixRule,
    /// Origin files found through their patches
    pub origins: Vec<NormalizedPath>,
    /// Filesystem changes made (empty on a dry run)
    pub changes: ChangeSet,
    /// Commit recording the changes, if one was written
    pub commit: Option<String>,
    /// Whether the run stopped before touching the tree
    pub dry_run: bool,
}

/// Run a switch described by `config`, persisting changes with `recorder`.
///
/// The rule is resolved and the tree scanned before anything is modified,
/// so rule errors leave the tree untouched. Origin files are then
/// processed one at a time; a failure aborts the run without undoing
/// earlier files and without recording a commit.
pub fn switch(config: &SwitchConfig, recorder: &impl ChangeRecorder) -> Result<SwitchReport> {
    let root = repository_root(&config.repo_path)?;

    let rule = resolve(&config.rule, &root)?;
    tracing::info!(rule = %rule, root = %root, "Resolved branches rule");

    let origins = classify(&root, rule.donors())?;

    if config.dry_run {
        tracing::info!(origins = origins.len(), "Dry run; leaving tree untouched");
        return Ok(SwitchReport {
            rule,
            origins: origins.into_iter().collect(),
            changes: ChangeSet::new(),
            commit: None,
            dry_run: true,
        });
    }

    let changes = RestoreEngine::new(&rule).restore_all(&origins)?;
    tracing::info!(changes = changes.len(), "Restored origin files");

    let title = config.render_title(rule.target());
    let commit = recorder.record(&root, &changes, &title)?;

    Ok(SwitchReport {
        rule,
        origins: origins.into_iter().collect(),
        changes,
        commit,
        dry_run: false,
    })
}

/// Canonical form of the repository path, which must be a directory.
fn repository_root(repo_path: &NormalizedPath) -> Result<NormalizedPath> {
    if !repo_path.is_dir() {
        return Err(Error::RepositoryPath {
            path: repo_path.to_native(),
        });
    }
    let canonical = dunce::canonicalize(repo_path.to_native())
        .map_err(|e| bunch_fs::Error::io(repo_path.to_native(), e))?;
    Ok(NormalizedPath::new(canonical))
}
