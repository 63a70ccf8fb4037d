//! Archive format constants and pack/unpack options

// Archive format constants
pub const HEADER_PREFIX: &str = "==> ";
pub const HEADER_SUFFIX: &str = " <==";
pub const TRIM_SIZE: usize = 4; // len("==> ") == len(" <==")
pub const PORTABLE_SEPARATOR: char = '|';

/// Chunk size used when scanning a file for null bytes
pub const BLOCK_SIZE: usize = 1024;

/// Order in which the tree lister yields files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    /// Whatever the filesystem enumeration yields. Not stable across
    /// platforms or filesystems, but matches archives made by earlier releases.
    #[default]
    Filesystem,
    /// Entries sorted by file name within each directory
    Sorted,
}

/// How strictly a line must look like a header to start a new block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMatch {
    /// The whole line must be `==> <path> <==`
    #[default]
    Strict,
    /// Only `==> ` at the start and a later ` <==` are required, so
    /// `==> a <== trailing` is also a header
    Prefix,
}

/// Options for packing a directory
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    pub order: WalkOrder,
}

/// Options for unpacking an archive
#[derive(Debug, Clone, Default)]
pub struct UnpackOptions {
    pub header_match: HeaderMatch,
}
