//! Archive decoder

use crate::archive::{from_portable, read_text, ContentGroups};
use crate::config::{HeaderMatch, UnpackOptions, HEADER_PREFIX, HEADER_SUFFIX, TRIM_SIZE};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Splits an archive into per-path content groups
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: UnpackOptions,
}

impl Decoder {
    /// Create a decoder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with explicit options
    pub fn with_options(options: UnpackOptions) -> Self {
        Self { options }
    }

    /// Select how headers are recognised
    pub fn with_header_match(mut self, header_match: HeaderMatch) -> Self {
        self.options.header_match = header_match;
        self
    }

    /// Check whether a line starts a new block
    pub fn is_header(&self, line: &str) -> bool {
        let line = line.trim_end();
        match self.options.header_match {
            HeaderMatch::Strict => Self::is_strict_header(line),
            HeaderMatch::Prefix => {
                let Some(rest) = line.strip_prefix(HEADER_PREFIX) else {
                    return false;
                };
                // At least one character must sit between the markers
                let mut name = rest.chars();
                name.next().is_some() && name.as_str().contains(HEADER_SUFFIX)
            }
        }
    }

    fn is_strict_header(line: &str) -> bool {
        // Markers must not overlap and the name must not be empty
        line.len() > 2 * TRIM_SIZE
            && line.starts_with(HEADER_PREFIX)
            && line.ends_with(HEADER_SUFFIX)
    }

    /// Extract the host path from a header line.
    ///
    /// Drops the four characters on either side of the trimmed line and
    /// turns `|` back into the host separator. Only meaningful for lines
    /// accepted by [`Decoder::is_header`].
    pub fn parse_header(&self, line: &str) -> PathBuf {
        let trimmed = line.trim();
        // Suffix may be followed by arbitrary text under prefix matching, so
        // count characters rather than bytes from the end
        let end = trimmed
            .char_indices()
            .rev()
            .nth(TRIM_SIZE - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let name = trimmed.get(TRIM_SIZE..end).unwrap_or("");
        from_portable(name)
    }

    /// Group archive lines by header.
    ///
    /// Every line is right-trimmed. Lines that appear before the first
    /// header are collected under the empty path.
    pub fn split<'a, I>(&self, lines: I) -> ContentGroups
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut groups = ContentGroups::new();
        let mut current = PathBuf::new();

        for line in lines {
            let line = line.trim_end();

            if self.is_header(line) {
                let loose = self.options.header_match == HeaderMatch::Prefix
                    && !Self::is_strict_header(line);
                if loose {
                    log::warn!("Treating loose header look-alike as a header: {}", line);
                }

                current = self.parse_header(line);
                if groups.start(current.clone()) {
                    log::warn!(
                        "Repeated header for {}, earlier content discarded",
                        current.display()
                    );
                }
                continue;
            }

            groups.push(&current, line);
        }

        groups
    }

    /// Decode an archive held in memory
    pub fn decode(&self, input: &str) -> ContentGroups {
        self.split(input.lines())
    }

    /// Read and decode an archive file
    pub fn decode_file(&self, path: &Path) -> Result<ContentGroups> {
        let text = read_text(path)?;
        Ok(self.decode(&text))
    }
}
