//! Promoting donor patches into origin files
//!
//! For each origin file the engine:
//!
//! 1. saves the current origin content as `<origin>.<origin suffix>`
//!    (the branch copy) and deletes the origin,
//! 2. picks the first donor `<origin>.<suffix>` that exists, in priority
//!    order,
//! 3. writes the donor content to the origin, or leaves the origin
//!    deleted when the donor is blank.
//!
//! Every step hits the disk immediately. A failure stops the run and
//! leaves earlier files as they are.

use bunch_fs::{NormalizedPath, io};
use bunch_git::{ChangeKind, ChangeSet};

use crate::rules::SuffixRule;
use crate::{Error, Result};

/// Applies a [`SuffixRule`] to origin files.
#[derive(Debug, Clone, Copy)]
pub struct RestoreEngine<'a> {
    rule: &'a SuffixRule,
}

impl<'a> RestoreEngine<'a> {
    pub fn new(rule: &'a SuffixRule) -> Self {
        Self { rule }
    }

    /// Restore every origin in order, stopping at the first error.
    pub fn restore_all<'p>(
        &self,
        origins: impl IntoIterator<Item = &'p NormalizedPath>,
    ) -> Result<ChangeSet> {
        let mut changes = ChangeSet::new();
        for origin in origins {
            self.restore(origin, &mut changes)?;
        }
        Ok(changes)
    }

    /// Restore a single origin file, recording what changed in `changes`.
    pub fn restore(&self, origin: &NormalizedPath, changes: &mut ChangeSet) -> Result<()> {
        let pending = self.save_branch_copy(origin, changes)?;

        let donor = self.select_donor(origin)?;
        if donor.is_dir() {
            return Err(Error::UnsupportedTarget {
                path: donor.to_native(),
            });
        }

        let content = io::read_bytes(&donor)?;
        if !is_blank(&content) {
            io::write_atomic(origin, &content)?;
            tracing::debug!(origin = %origin, donor = %donor, kind = %pending, "Promoted donor");
            changes.insert(pending, origin.clone());
            return Ok(());
        }

        match pending {
            ChangeKind::Add => {
                tracing::debug!(origin = %origin, donor = %donor, "Blank donor for absent origin");
            }
            ChangeKind::Modify => {
                tracing::debug!(origin = %origin, donor = %donor, "Blank donor removes origin");
                changes.insert(ChangeKind::Remove, origin.clone());
            }
            ChangeKind::Remove => {
                return Err(Error::Invariant {
                    message: format!("pending change for {origin} is a removal"),
                });
            }
        }
        Ok(())
    }

    /// Move the existing origin aside as its branch copy.
    ///
    /// Returns the kind of change the origin will undergo: `Modify` when it
    /// existed, `Add` when it did not.
    fn save_branch_copy(
        &self,
        origin: &NormalizedPath,
        changes: &mut ChangeSet,
    ) -> Result<ChangeKind> {
        if origin.is_dir() {
            return Err(Error::UnsupportedTarget {
                path: origin.to_native(),
            });
        }
        if !origin.exists() {
            return Ok(ChangeKind::Add);
        }

        let branch_copy = origin.with_suffix(self.rule.origin());
        if branch_copy.exists() {
            return Err(Error::Collision {
                path: branch_copy.to_native(),
            });
        }

        io::copy_file(origin, &branch_copy)?;
        changes.insert(ChangeKind::Add, branch_copy.clone());
        io::remove_file(origin)?;
        tracing::debug!(origin = %origin, copy = %branch_copy, "Saved branch copy");

        Ok(ChangeKind::Modify)
    }

    /// First donor patch of `origin` present on disk.
    fn select_donor(&self, origin: &NormalizedPath) -> Result<NormalizedPath> {
        self.rule
            .donors()
            .iter()
            .map(|suffix| origin.with_suffix(suffix))
            .find(NormalizedPath::exists)
            .ok_or_else(|| Error::Invariant {
                message: format!("no donor patch found for {origin}"),
            })
    }
}

/// Whether a donor holds only whitespace.
///
/// UTF-8 content uses Unicode whitespace; anything else falls back to ASCII.
fn is_blank(content: &[u8]) -> bool {
    match std::str::from_utf8(content) {
        Ok(text) => text.trim().is_empty(),
        Err(_) => content.trim_ascii().is_empty(),
    }
}
