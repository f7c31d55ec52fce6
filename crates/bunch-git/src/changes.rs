//! File change log accumulated during a switch.

use std::collections::HashSet;

use bunch_fs::NormalizedPath;
use serde::Serialize;

/// What happened to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// The path did not exist before and now does
    Add,
    /// The path existed and its content was replaced
    Modify,
    /// The path existed and was deleted
    Remove,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Add => "add",
            Self::Modify => "modify",
            Self::Remove => "remove",
        };
        f.write_str(label)
    }
}

/// A single filesystem change.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileChange {
    /// Kind of change
    pub kind: ChangeKind,
    /// Absolute path of the changed file
    pub path: NormalizedPath,
}

impl FileChange {
    pub fn new(kind: ChangeKind, path: NormalizedPath) -> Self {
        Self { kind, path }
    }
}

/// Set of changes produced by one switch.
///
/// Entries are distinct by `(kind, path)`: recording the same change twice
/// keeps one entry, while the same path under a different kind is a second
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: HashSet<FileChange>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change. Returns `false` if the identical change was already present.
    pub fn insert(&mut self, kind: ChangeKind, path: NormalizedPath) -> bool {
        self.changes.insert(FileChange::new(kind, path))
    }

    pub fn contains(&self, kind: ChangeKind, path: &NormalizedPath) -> bool {
        self.changes.contains(&FileChange::new(kind, path.clone()))
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Changes ordered by path, then kind.
    pub fn sorted(&self) -> Vec<&FileChange> {
        let mut sorted: Vec<_> = self.changes.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path).then(a.kind.cmp(&b.kind)));
        sorted
    }
}

impl Serialize for ChangeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}
