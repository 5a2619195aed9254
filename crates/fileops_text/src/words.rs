use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use fileops_fs::{FileOps, TextEncoding};

/// Maps every non-blank line of a UTF-8 text file, trimmed, to its length in
/// characters.
///
/// A line that appears more than once keeps a single entry.
pub fn words<T: AsRef<Path>>(path: T) -> Result<HashMap<String, usize>> {
    words_with_encoding(path, TextEncoding::default())
}

pub fn words_with_encoding<T: AsRef<Path>>(
    path: T,
    encoding: TextEncoding,
) -> Result<HashMap<String, usize>> {
    let mut lengths = HashMap::new();
    for line in FileOps::read_lines(path, Some(encoding))? {
        let word = line.trim();
        if !word.is_empty() {
            lengths.insert(word.to_string(), word.chars().count());
        }
    }
    Ok(lengths)
}
