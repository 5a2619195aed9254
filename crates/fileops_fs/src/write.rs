use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::TextEncoding;

impl crate::FileOps {
    /// Creates or truncates `path` and writes `contents` to it.
    pub fn write<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        let mut file = Self::open_write_binary(path.as_ref())?;
        file.write_all(contents.as_ref())
            .map_err(|error| crate::Error::io(path, error).into())
    }

    pub fn write_text<T: AsRef<Path>>(
        path: T,
        contents: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        Self::write_lines(path, [contents], encoding)
    }

    /// Writes every element verbatim; no separator is inserted between them.
    pub fn write_lines<T, I, S>(path: T, lines: I, encoding: Option<TextEncoding>) -> Result<()>
    where
        T: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let writer = Self::open_write(path)?;
        Self::write_encoded(path, writer, lines, encoding.unwrap_or_default())
            .with_context(|| format!("Failed to write file {}", path.display()))
    }

    pub fn append_text<T: AsRef<Path>>(
        path: T,
        contents: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        Self::append_lines(path, [contents], encoding)
    }

    /// Appends every element verbatim, creating the file if needed.
    pub fn append_lines<T, I, S>(path: T, lines: I, encoding: Option<TextEncoding>) -> Result<()>
    where
        T: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let writer = Self::open_append(path)?;
        Self::write_encoded(path, writer, lines, encoding.unwrap_or_default())
            .with_context(|| format!("Failed to append to file {}", path.display()))
    }

    fn write_encoded<W, I, S>(
        path: &Path,
        mut writer: W,
        lines: I,
        encoding: TextEncoding,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let bytes = encoding.encode(path, line.as_ref())?;
            writer
                .write_all(&bytes)
                .map_err(|error| crate::Error::io(path, error))?;
        }
        writer.flush().map_err(|error| crate::Error::io(path, error))?;
        Ok(())
    }
}
