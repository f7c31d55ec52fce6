//! Finding the origin files a switch touches

use std::collections::{BTreeSet, HashSet};

use bunch_fs::{NormalizedPath, walk_tree};

use crate::Result;

/// Collect the origin files behind every donor patch under `root`.
///
/// An entry is a donor patch when its extension is one of `donors`; its
/// origin is the same path without that extension. Directories are
/// classified too, so a suffixed directory reaches the restore step and
/// is rejected there. Several patches of
/// one origin yield a single entry. `build/resources` and `.git` are not
/// searched.
pub fn classify(root: &NormalizedPath, donors: &[String]) -> Result<BTreeSet<NormalizedPath>> {
    let donors: HashSet<&str> = donors.iter().map(String::as_str).collect();
    let mut origins = BTreeSet::new();

    for entry in walk_tree(root) {
        let path = entry?;
        let is_donor = path.extension().is_some_and(|ext| donors.contains(ext));
        if !is_donor {
            continue;
        }
        if let Some(origin) = path.without_extension() {
            tracing::debug!(patch = %path, origin = %origin, "Found patch");
            origins.insert(origin);
        }
    }

    tracing::debug!(count = origins.len(), "Classified origin files");
    Ok(origins)
}
