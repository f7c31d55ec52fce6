//! Filesystem layer for bunch-switch
//!
//! Provides normalized paths, atomic file I/O and the tree walk used to
//! discover patch files.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use constants::BunchPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use walk::{Walk, walk_tree};
