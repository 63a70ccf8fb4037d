//! Recreate files from decoded content groups

use crate::archive::ContentGroups;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Outcome of making sure a parent directory exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// The directory was already there
    Existing,
    /// The directory (and any missing ancestors) was created
    Created,
}

/// Create `dir` and its ancestors unless it already is a directory
pub fn ensure_dir(dir: &Path) -> Result<DirStatus> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(DirStatus::Existing);
    }

    fs::create_dir_all(dir).map_err(|e| Error::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(DirStatus::Created)
}

/// Write every group below `dest`, in insertion order.
///
/// Lines are joined with `\n` and existing files are overwritten. Returns
/// the number of files written. Content that preceded the first header has
/// nowhere to go and is reported as [`Error::ContentBeforeHeader`].
pub fn write_groups(groups: &ContentGroups, dest: &Path) -> Result<usize> {
    let mut written = 0;

    for (path, lines) in groups.iter() {
        if path.as_os_str().is_empty() {
            return Err(Error::ContentBeforeHeader { lines: lines.len() });
        }

        let target = dest.join(path);
        if let Some(parent) = target.parent() {
            if ensure_dir(parent)? == DirStatus::Created {
                log::debug!("Created directory: {}", parent.display());
            }
        }

        fs::write(&target, lines.join("\n")).map_err(|e| Error::Write {
            path: target.clone(),
            source: e,
        })?;
        log::debug!("Extracted: {}", target.display());
        written += 1;
    }

    log::info!("Wrote {} file(s) under {}", written, dest.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn groups(entries: &[(&str, &[&str])]) -> ContentGroups {
        let mut groups = ContentGroups::new();
        for (path, lines) in entries {
            let path = PathBuf::from(path);
            groups.start(path.clone());
            for line in *lines {
                groups.push(&path, *line);
            }
        }
        groups
    }

    #[test]
    fn test_write_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let input = groups(&[("a/b/c.txt", &["one", "two", ""][..]), ("top.txt", &["x"][..])]);

        let written = write_groups(&input, temp_dir.path()).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("a/b/c.txt")).unwrap(),
            "one\ntwo\n"
        );
        assert_eq!(fs::read_to_string(temp_dir.path().join("top.txt")).unwrap(), "x");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("f.txt");
        fs::write(&target, "old content that is longer").unwrap();

        write_groups(&groups(&[("f.txt", &["new"][..])]), temp_dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_empty_groups_write_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let written = write_groups(&ContentGroups::new(), temp_dir.path()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_content_before_header_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = write_groups(&groups(&[("", &["stray"][..])]), temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::ContentBeforeHeader { lines: 1 }));
    }

    #[test]
    fn test_ensure_dir_status() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("x/y");
        assert_eq!(ensure_dir(&dir).unwrap(), DirStatus::Created);
        assert_eq!(ensure_dir(&dir).unwrap(), DirStatus::Existing);
    }

    #[test]
    fn test_parent_blocked_by_file_is_surfaced() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("blocker"), "i am a file").unwrap();

        let input = groups(&[("blocker/inner.txt", &["x"][..])]);
        let err = write_groups(&input, temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }
}
