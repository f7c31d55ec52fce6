//! Core switch logic for bunch-switch
//!
//! A bunch tree keeps branch-specific variants of a file next to it as
//! `<file>.<suffix>` patches. Switching branches means promoting the best
//! available patch into the file and keeping the displaced content as a
//! patch of the branch being left.
//!
//! # Architecture
//!
//! ```text
//!                    bunch-cli
//!                        |
//!                   bunch-core
//!                   /        \
//!             bunch-fs    bunch-git
//! ```
//!
//! - [`rules`]: parse explicit rules, or resolve a target through `.bunch`
//! - [`classify`]: find origin files through their donor patches
//! - [`restore`]: back up, promote and remove, collecting a [`ChangeSet`]
//! - [`switch`]: the whole run, handing the change set to a
//!   [`ChangeRecorder`]

pub mod classify;
pub mod config;
pub mod error;
pub mod restore;
pub mod rules;
pub mod switch;

pub use bunch_git::{ChangeKind, ChangeRecorder, ChangeSet, FileChange, GitRecorder};
pub use classify::classify;
pub use config::{DEFAULT_TITLE, SwitchConfig};
pub use error::{Error, Result, RuleError};
pub use restore::RestoreEngine;
pub use rules::{RuleHistory, SuffixRule, resolve};
pub use switch::{SwitchReport, switch};
