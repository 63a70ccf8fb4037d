//! Archive data structures

use crate::config::PORTABLE_SEPARATOR;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// A text file ready to be packed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path of the file, in host separator form
    pub path: PathBuf,
    /// Lines of the file with trailing whitespace removed
    pub lines: Vec<String>,
}

impl Entry {
    /// Create an entry from raw text, right-trimming every line
    pub fn new(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
        }
    }

    /// Read a file from disk. The file must be valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        Ok(Self::new(path, &text))
    }

    /// Header name for this entry, e.g. `src|main.rs`
    pub fn portable_name(&self) -> Result<String> {
        to_portable(&self.path)
    }
}

/// Read a whole file as UTF-8 text
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|e| Error::read(path, e))?;
    String::from_utf8(data).map_err(|_| Error::Decode {
        path: path.to_path_buf(),
    })
}

/// Replace the host separator with `|`
pub fn to_portable(path: &Path) -> Result<String> {
    let name = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
    })?;
    Ok(name.replace(MAIN_SEPARATOR, &PORTABLE_SEPARATOR.to_string()))
}

/// Inverse of [`to_portable`]
pub fn from_portable(name: &str) -> PathBuf {
    PathBuf::from(name.replace(PORTABLE_SEPARATOR, MAIN_SEPARATOR_STR))
}

/// Lines collected per path while reading an archive.
///
/// Keys keep the order in which their header was first seen. A repeated
/// header resets that path's lines without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentGroups {
    groups: IndexMap<PathBuf, Vec<String>>,
}

impl ContentGroups {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the group for `path`.
    /// Returns `true` if an earlier group for the same path was discarded.
    pub fn start(&mut self, path: PathBuf) -> bool {
        self.groups.insert(path, Vec::new()).is_some()
    }

    /// Append a line to the group for `path`, creating it if needed
    pub fn push(&mut self, path: &Path, line: impl Into<String>) {
        if let Some(lines) = self.groups.get_mut(path) {
            lines.push(line.into());
        } else {
            self.groups.insert(path.to_path_buf(), vec![line.into()]);
        }
    }

    /// Lines for `path`
    pub fn get(&self, path: &Path) -> Option<&[String]> {
        self.groups.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[String])> {
        self.groups.iter().map(|(path, lines)| (path.as_path(), lines.as_slice()))
    }
}
