//! Switch configuration
//!
//! A [`SwitchConfig`] is built once from validated command-line input and
//! passed down explicitly; nothing reads ambient settings.

use bunch_fs::NormalizedPath;

/// Commit title used when none is given
pub const DEFAULT_TITLE: &str = "==== switch {target} ====";

/// Placeholder in a commit title replaced by the rule's target suffix
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Everything one switch run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Working tree root (the directory holding `.git`)
    pub repo_path: NormalizedPath,
    /// Explicit `_`-joined rule or a single target suffix
    pub rule: String,
    /// Commit title template
    pub title: String,
    /// Stop after classification without touching the tree
    pub dry_run: bool,
}

impl SwitchConfig {
    /// Create a config with the default title.
    pub fn new(repo_path: impl Into<NormalizedPath>, rule: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            rule: rule.into(),
            title: DEFAULT_TITLE.to_string(),
            dry_run: false,
        }
    }

    /// Replace the commit title template.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Commit title with every `{target}` replaced by `target`.
    pub fn render_title(&self, target: &str) -> String {
        self.title.replace(TARGET_PLACEHOLDER, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_names_target() {
        let config = SwitchConfig::new("/repo", "prod");
        assert_eq!(config.render_title("prod"), "==== switch prod ====");
    }

    #[test]
    fn custom_title_replaces_every_placeholder() {
        let config = SwitchConfig::new("/repo", "a_b").with_title("{target} <- {target}");
        assert_eq!(config.render_title("b"), "b <- b");
    }

    #[test]
    fn title_without_placeholder_is_kept() {
        let config = SwitchConfig::new("/repo", "a_b").with_title("plain");
        assert_eq!(config.render_title("b"), "plain");
    }
}
