//! Archive encoder

use crate::archive::Entry;
use crate::config::{PackOptions, HEADER_PREFIX, HEADER_SUFFIX};
use crate::error::Result;
use crate::walk;
use std::path::Path;

/// Encodes files into archive blocks
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: PackOptions,
}

impl Encoder {
    /// Create an encoder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit options
    pub fn with_options(options: PackOptions) -> Self {
        Self { options }
    }

    /// Format one entry as a block.
    ///
    /// The block is `==> name <==`, the lines, and exactly one blank line.
    /// Trailing blank lines of the content do not survive.
    pub fn encode_entry(&self, entry: &Entry) -> Result<String> {
        let mut block = String::new();
        block.push_str(HEADER_PREFIX);
        block.push_str(&entry.portable_name()?);
        block.push_str(HEADER_SUFFIX);
        block.push('\n');
        block.push_str(&entry.lines.join("\n"));

        let mut block = block.trim().to_string();
        block.push_str("\n\n");
        Ok(block)
    }

    /// Read a file and format it as a block
    pub fn encode_file(&self, path: &Path) -> Result<String> {
        self.encode_entry(&Entry::from_path(path)?)
    }

    /// Pack every text file under `root` into one archive string
    pub fn pack(&self, root: &Path) -> Result<String> {
        let files = walk::list_files(root, self.options.order)?;

        let mut output = String::new();
        for path in &files {
            output.push_str(&self.encode_file(path)?);
            log::debug!("Packed: {}", path.display());
        }

        log::info!("Packed {} file(s) from {}", files.len(), root.display());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalkOrder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_encode_simple_entry() {
        let entry = Entry::new("hello.txt", "Hello, world!\n");
        let block = Encoder::new().encode_entry(&entry).unwrap();
        assert_eq!(block, "==> hello.txt <==\nHello, world!\n\n");
    }

    #[test]
    fn test_encode_strips_trailing_whitespace_and_blank_tail() {
        let entry = Entry::new("a.txt", "line 1   \nline 2\t\n\n\n");
        let block = Encoder::new().encode_entry(&entry).unwrap();
        assert_eq!(block, "==> a.txt <==\nline 1\nline 2\n\n");
    }

    #[test]
    fn test_encode_empty_file() {
        let entry = Entry::new("empty", "");
        let block = Encoder::new().encode_entry(&entry).unwrap();
        assert_eq!(block, "==> empty <==\n\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_encode_with_subdirectories() {
        let entry = Entry::new("a/b/c.txt", "Content");
        let block = Encoder::new().encode_entry(&entry).unwrap();
        assert!(block.starts_with("==> a|b|c.txt <==\n"));
    }

    #[test]
    fn test_pack_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "alpha\n").unwrap();
        fs::write(root.join("b.txt"), "beta\n").unwrap();
        fs::write(root.join("c.bin"), [0u8, 1, 2]).unwrap();

        let encoder = Encoder::with_options(PackOptions {
            order: WalkOrder::Sorted,
        });
        let archive = encoder.pack(root).unwrap();

        let a = crate::archive::to_portable(&root.join("a.txt")).unwrap();
        let b = crate::archive::to_portable(&root.join("b.txt")).unwrap();
        assert_eq!(archive, format!("==> {a} <==\nalpha\n\n==> {b} <==\nbeta\n\n"));
        assert!(!archive.contains("c.bin"));
    }

    #[test]
    fn test_pack_empty_tree() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("x/y")).unwrap();
        assert_eq!(Encoder::new().pack(temp_dir.path()).unwrap(), "");
    }

    #[test]
    fn test_pack_fails_on_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.txt"), [0xC3, 0x28]).unwrap();

        let err = Encoder::new().pack(temp_dir.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Decode { .. }));
    }
}
