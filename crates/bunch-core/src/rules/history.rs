//! The `.bunch` rule-history file
//!
//! Line one (first non-empty line) names the branch the tree is currently
//! on. Every later line is a rule stored for switching to the branch named
//! by its first suffix.

use bunch_fs::{BunchPath, NormalizedPath, io};

use crate::RuleError;
use super::rule::RULE_SEPARATOR;

/// Parsed contents of a `.bunch` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleHistory {
    current: Option<String>,
    rules: Vec<String>,
}

impl RuleHistory {
    /// Parse history text. Lines are trimmed; blank lines are ignored.
    pub fn parse(content: &str) -> Self {
        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
        let current = lines.next().map(str::to_string);
        let rules = lines.map(str::to_string).collect();
        Self { current, rules }
    }

    /// Load `.bunch` from the repository root.
    pub fn load(repo_path: &NormalizedPath) -> Result<Self, RuleError> {
        let path = Self::path_in(repo_path);
        if !path.is_file() {
            return Err(RuleError::HistoryMissing {
                path: path.to_native(),
            });
        }
        let content = io::read_text(&path).map_err(RuleError::Unreadable)?;
        Ok(Self::parse(&content))
    }

    /// Location of the history file for a repository.
    pub fn path_in(repo_path: &NormalizedPath) -> NormalizedPath {
        repo_path.join(BunchPath::HistoryFile.as_str())
    }

    /// Suffix of the branch the tree is on.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// First stored rule that targets `target`.
    ///
    /// Matches a line equal to `target` or starting with `target_`.
    pub fn find_rule(&self, target: &str) -> Option<&str> {
        let prefix = format!("{target}{RULE_SEPARATOR}");
        self.rules
            .iter()
            .map(String::as_str)
            .find(|rule| *rule == target || rule.starts_with(&prefix))
    }
}
