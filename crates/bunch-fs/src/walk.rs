//! Lazy directory traversal for bunch-managed trees.
//!
//! [`walk_tree`] yields every entry under a root, depth first. A
//! directory is yielded before its contents. Two kinds of directory are
//! neither yielded nor entered: the git database (`.git`) and generated
//! build output (`build/resources`).

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::{BunchPath, Error, NormalizedPath, Result};

/// Iterator over the entries below a root directory.
///
/// Directories are read one at a time as the iterator advances, so a
/// caller that stops early never touches the rest of the tree.
#[derive(Debug)]
pub struct Walk {
    pending: Vec<(PathBuf, ReadDir)>,
    root_error: Option<Error>,
}

/// Start a traversal rooted at `root`.
///
/// A root that cannot be read surfaces as the first item of the iterator.
pub fn walk_tree(root: &NormalizedPath) -> Walk {
    let native = root.to_native();
    match fs::read_dir(&native) {
        Ok(entries) => Walk {
            pending: vec![(native, entries)],
            root_error: None,
        },
        Err(e) => Walk {
            pending: Vec::new(),
            root_error: Some(Error::io(native, e)),
        },
    }
}

/// Whether the traversal must not descend into `dir`.
pub fn is_skipped_dir(dir: &Path) -> bool {
    let Some(name) = dir.file_name() else {
        return false;
    };
    if name == BunchPath::GitDir.as_str() {
        return true;
    }
    name == BunchPath::ResourcesDir.as_str()
        && dir
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|parent| parent == BunchPath::BuildDir.as_str())
}

impl Iterator for Walk {
    type Item = Result<NormalizedPath>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.root_error.take() {
            return Some(Err(err));
        }

        loop {
            let (dir, entries) = self.pending.last_mut()?;
            let Some(entry) = entries.next() else {
                self.pending.pop();
                continue;
            };

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::io(dir.clone(), e))),
            };
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => return Some(Err(Error::io(path, e))),
            };

            if !file_type.is_dir() {
                return Some(Ok(NormalizedPath::new(&path)));
            }

            if is_skipped_dir(&path) {
                tracing::debug!(dir = %path.display(), "Skipping directory");
                continue;
            }

            match fs::read_dir(&path) {
                Ok(children) => {
                    let dir = NormalizedPath::new(&path);
                    self.pending.push((path, children));
                    return Some(Ok(dir));
                }
                Err(e) => return Some(Err(Error::io(path, e))),
            }
        }
    }
}
