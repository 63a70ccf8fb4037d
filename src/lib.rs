//! # magpie
//!
//! Convert project source code to and from a flat text file.
//!
//! ## Archive Format
//!
//! An archive is a sequence of blocks, one per text file:
//!
//! ```text
//! ==> project|src|main.rs <==
//! fn main() {}
//!
//! ==> project|README.md <==
//! # Project
//!
//! ```
//!
//! The header carries the file's path with the host separator replaced by
//! `|`, so archives made on one platform unpack on another. Each block ends
//! with exactly one blank line. Trailing whitespace on every line is dropped
//! and is never restored.
//!
//! ## Binary Files
//!
//! Files with a null byte anywhere are skipped when packing. See
//! [`detect`] for the heuristic and its blind spots (UTF-16 text looks binary).
//!
//! ## Known Ambiguity
//!
//! There is no escaping. A content line that looks like a header starts a
//! new block when unpacking. [`HeaderMatch::Strict`] (the default) only
//! accepts whole-line headers; [`HeaderMatch::Prefix`] also accepts lines
//! such as `==> a <== trailing text`.
//!
//! ## Ordering
//!
//! Block order follows the directory walk. With the default
//! [`WalkOrder::Filesystem`] it depends on the filesystem and is not
//! guaranteed to be stable; [`WalkOrder::Sorted`] makes it deterministic.

pub mod archive;
pub mod config;
pub mod decoder;
pub mod detect;
pub mod encoder;
pub mod error;
pub mod materialize;
pub mod walk;

pub use archive::{ContentGroups, Entry};
pub use config::{HeaderMatch, PackOptions, UnpackOptions, WalkOrder};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use materialize::DirStatus;

use std::path::Path;

/// Pack every text file under `root` into an archive string
pub fn pack(root: &Path) -> Result<String> {
    Encoder::new().pack(root)
}

/// Unpack the archive at `archive` into `dest`, returning the number of
/// files written
pub fn unpack(archive: &Path, dest: &Path) -> Result<usize> {
    unpack_with(archive, dest, UnpackOptions::default())
}

/// [`unpack`] with explicit options
pub fn unpack_with(archive: &Path, dest: &Path, options: UnpackOptions) -> Result<usize> {
    let groups = Decoder::with_options(options).decode_file(archive)?;
    materialize::write_groups(&groups, dest)
}
