use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Result;

use crate::error::Error;

impl crate::FileOps {
    /// Opens a buffered reader over `path` for line-oriented text reads.
    pub fn open_read<T: AsRef<Path>>(path: T) -> Result<BufReader<File>> {
        Ok(BufReader::new(Self::open_read_binary(path)?))
    }

    pub fn open_read_binary<T: AsRef<Path>>(path: T) -> Result<File> {
        File::open(path.as_ref()).map_err(|error| Error::io(path, error).into())
    }

    /// Creates or truncates `path` and wraps it in a buffered writer.
    ///
    /// Buffered data is flushed when the writer is dropped, but errors from
    /// that final flush are lost; call `flush()` to observe them.
    pub fn open_write<T: AsRef<Path>>(path: T) -> Result<BufWriter<File>> {
        Ok(BufWriter::new(Self::open_write_binary(path)?))
    }

    pub fn open_write_binary<T: AsRef<Path>>(path: T) -> Result<File> {
        File::create(path.as_ref()).map_err(|error| Error::io(path, error).into())
    }

    /// Opens `path` for appending, creating it if absent.
    pub fn open_append<T: AsRef<Path>>(path: T) -> Result<BufWriter<File>> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())
            .map(BufWriter::new)
            .map_err(|error| Error::io(path, error).into())
    }
}
