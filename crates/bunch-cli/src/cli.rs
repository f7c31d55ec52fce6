//! CLI argument parsing using clap derive

use std::path::PathBuf;

use bunch_core::{DEFAULT_TITLE, SwitchConfig};
use clap::Parser;

/// Switch a bunch tree to another branch variant and commit the result
///
/// Every file with a `<file>.<suffix>` patch for one of the donor suffixes
/// gets the best patch promoted into place. The displaced content is kept
/// as `<file>.<origin suffix>`.
///
/// Examples:
///   bunch . dev_prod                 # explicit rule: origin dev, donor prod
///   bunch . dev_feature_prod         # feature wins over prod where both exist
///   bunch . prod                     # look up the rule for prod in .bunch
///   bunch . prod "switch to {target}"
#[derive(Parser, Debug)]
#[command(name = "bunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List affected files without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output the switch report as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Working tree root (the directory containing .git)
    pub git_path: PathBuf,

    /// Branches rule: origin_donor[_donor...] or a single target suffix
    pub branches_rule: String,

    /// Commit title; {target} is replaced by the switch target
    #[arg(default_value = DEFAULT_TITLE)]
    pub commit_title: String,
}

impl Cli {
    /// Build the switch configuration from parsed arguments.
    pub fn switch_config(&self) -> SwitchConfig {
        SwitchConfig::new(self.git_path.as_path(), self.branches_rule.as_str())
            .with_title(self.commit_title.as_str())
            .with_dry_run(self.dry_run)
    }
}
