//! Directory traversal

use crate::config::WalkOrder;
use crate::detect;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list every text file under `root`.
///
/// Returned paths are `root` joined with the path below it, so they keep
/// whatever form (relative or absolute) `root` was given in. Binary files are
/// skipped. With [`WalkOrder::Filesystem`] the order is whatever the
/// filesystem yields and must not be relied upon.
///
/// A `root` that is a regular file has no tree below it and yields nothing.
pub fn list_files(root: &Path, order: WalkOrder) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        log::warn!("{} is not a directory, nothing to pack", root.display());
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(root);
    if order == WalkOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        // Symlinked directories are listed but not descended into
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }

        let path = entry.into_path();
        match detect::classify(&path)? {
            detect::Classification::Text => files.push(path),
            detect::Classification::Binary { offset } => {
                log::debug!(
                    "Skipping binary file {} (null byte at {})",
                    path.display(),
                    offset
                );
            }
        }
    }

    Ok(files)
}
