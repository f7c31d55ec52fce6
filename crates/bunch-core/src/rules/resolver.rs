//! Turning a user-supplied branches rule into a [`SuffixRule`]

use bunch_fs::NormalizedPath;

use crate::RuleError;
use super::history::RuleHistory;
use super::rule::{RULE_SEPARATOR, SuffixRule, split_rule};

/// Resolve a branches rule.
///
/// A rule with two or more suffixes is explicit and returned as written.
/// A single suffix is a switch target, looked up in the repository's
/// `.bunch` history by [`read_rule_from_file`].
pub fn resolve(rule: &str, repo_path: &NormalizedPath) -> Result<SuffixRule, RuleError> {
    let rule = rule.trim();
    if rule.is_empty() {
        return Err(RuleError::EmptyRule);
    }

    let suffixes = split_rule(rule);
    if suffixes.len() >= 2 {
        tracing::debug!(rule, "Using explicit rule");
        return SuffixRule::new(suffixes);
    }

    read_rule_from_file(rule, repo_path)
}

/// Resolve a single target suffix through the `.bunch` history.
///
/// The stored rule reads "from the current branch, reach `target`". It is
/// extended with the current suffix and reversed so the result is origin
/// first like an explicit rule: history `A_B_C` with current `X` gives
/// `X_C_B_A`.
pub fn read_rule_from_file(
    target: &str,
    repo_path: &NormalizedPath,
) -> Result<SuffixRule, RuleError> {
    let history = RuleHistory::load(repo_path)?;

    let current = history.current().ok_or_else(|| RuleError::MissingCurrent {
        path: RuleHistory::path_in(repo_path).to_native(),
    })?;

    if current == target {
        return Err(RuleError::OnlyTarget {
            target: target.to_string(),
        });
    }

    let requested = history
        .find_rule(target)
        .ok_or_else(|| RuleError::NoMatchingRule {
            target: target.to_string(),
        })?;

    let mut suffixes = split_rule(&format!("{requested}{RULE_SEPARATOR}{current}"));
    suffixes.reverse();
    tracing::debug!(wanted = target, requested, current, "Resolved rule from history");

    SuffixRule::new(suffixes)
}
