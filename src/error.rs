//! Error types for magpie

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using magpie's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while packing or unpacking.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file is not valid UTF-8 text.
    #[error("File {path} is not valid UTF-8")]
    Decode { path: PathBuf },

    /// A path cannot be represented in an archive header.
    #[error("Path is not valid Unicode: {path}")]
    InvalidPath { path: PathBuf },

    /// Directory traversal failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A parent directory could not be created (other than it already existing).
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A reconstructed file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The archive has content before its first header.
    #[error("Archive has {lines} line(s) before the first header")]
    ContentBeforeHeader { lines: usize },
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }
}
