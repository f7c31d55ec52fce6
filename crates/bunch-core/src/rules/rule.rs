//! Ordered suffix list driving a switch

use serde::Serialize;

use crate::RuleError;

/// Separator between suffixes in a textual rule
pub const RULE_SEPARATOR: &str = "_";

/// Split a textual rule into its suffixes.
///
/// Empty segments are kept so that validation can reject them.
pub fn split_rule(rule: &str) -> Vec<String> {
    rule.split(RULE_SEPARATOR).map(str::to_string).collect()
}

/// A resolved branches rule.
///
/// Always holds at least two non-empty suffixes: the origin suffix first,
/// then donors from highest to lowest priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuffixRule {
    suffixes: Vec<String>,
}

impl SuffixRule {
    /// Build a rule from suffixes, origin first.
    pub fn new(suffixes: Vec<String>) -> Result<Self, RuleError> {
        if suffixes.iter().any(String::is_empty) {
            return Err(RuleError::EmptySuffix {
                rule: suffixes.join(RULE_SEPARATOR),
            });
        }
        match suffixes.as_slice() {
            [] => Err(RuleError::EmptyRule),
            [only] => Err(RuleError::OnlyTarget {
                target: only.clone(),
            }),
            _ => Ok(Self { suffixes }),
        }
    }

    /// Suffix the current origin content belongs to.
    pub fn origin(&self) -> &str {
        &self.suffixes[0]
    }

    /// Donor suffixes, highest priority first.
    pub fn donors(&self) -> &[String] {
        &self.suffixes[1..]
    }

    /// The suffix being switched to: the last one in the rule.
    pub fn target(&self) -> &str {
        self.suffixes.last().map_or("", String::as_str)
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl std::fmt::Display for SuffixRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffixes.join(RULE_SEPARATOR))
    }
}
