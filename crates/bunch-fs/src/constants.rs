//! Well-known names in a bunch-managed working tree.

use std::path::Path;

/// Filesystem markers the switch logic treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BunchPath {
    /// The `.bunch` rule-history file at the repository root
    HistoryFile,
    /// The `.git` directory (Git database)
    GitDir,
    /// The `build` directory that owns generated output
    BuildDir,
    /// The `resources` directory; skipped when its parent is [`BunchPath::BuildDir`]
    ResourcesDir,
}

impl BunchPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HistoryFile => ".bunch",
            Self::GitDir => ".git",
            Self::BuildDir => "build",
            Self::ResourcesDir => "resources",
        }
    }
}

impl AsRef<Path> for BunchPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for BunchPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BunchPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
