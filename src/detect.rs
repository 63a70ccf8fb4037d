//! Text/binary classification
//!
//! A file is considered binary as soon as any [`BLOCK_SIZE`] chunk contains a
//! null byte. This is a heuristic: UTF-16 text embeds nulls and will be
//! reported as binary.

use crate::config::BLOCK_SIZE;
use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Result of classifying a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No null byte found
    Text,
    /// Null byte found at `offset`
    Binary { offset: u64 },
}

impl Classification {
    pub fn is_binary(&self) -> bool {
        matches!(self, Classification::Binary { .. })
    }
}

/// Classify the file at `path`
pub fn classify(path: &Path) -> Result<Classification> {
    let file = fs::File::open(path).map_err(|e| Error::read(path, e))?;
    classify_reader(file).map_err(|e| Error::read(path, e))
}

/// Classify any reader, scanning it chunk by chunk
pub fn classify_reader<R: Read>(mut reader: R) -> std::io::Result<Classification> {
    let mut block = Vec::with_capacity(BLOCK_SIZE);
    let mut offset = 0u64;

    loop {
        block.clear();
        // `take` keeps reading until the chunk is full or EOF
        let n = (&mut reader).take(BLOCK_SIZE as u64).read_to_end(&mut block)?;

        if let Some(pos) = block.iter().position(|&b| b == 0) {
            return Ok(Classification::Binary {
                offset: offset + pos as u64,
            });
        }

        if n < BLOCK_SIZE {
            return Ok(Classification::Text);
        }
        offset += n as u64;
    }
}

/// Convenience wrapper: `true` if the file looks binary
pub fn is_binary(path: &Path) -> Result<bool> {
    Ok(classify(path)?.is_binary())
}
