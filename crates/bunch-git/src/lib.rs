//! Git change recording for bunch-switch
//!
//! A switch produces a [`ChangeSet`]; a [`ChangeRecorder`] persists it.
//! [`GitRecorder`] stages the set in the repository index and writes a
//! single commit on `HEAD`.

pub mod changes;
pub mod error;
pub mod recorder;

pub use changes::{ChangeKind, ChangeSet, FileChange};
pub use error::{Error, Result};
pub use recorder::{ChangeRecorder, GitRecorder};
