//! Branches rule handling
//!
//! A branches rule names the origin suffix followed by donor suffixes in
//! descending priority. It is either given explicitly (`dev_feature_prod`)
//! or resolved from a single target suffix through the `.bunch` history.

mod history;
mod resolver;
mod rule;

pub use history::RuleHistory;
pub use resolver::{read_rule_from_file, resolve};
pub use rule::{RULE_SEPARATOR, SuffixRule, split_rule};
