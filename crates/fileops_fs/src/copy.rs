use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use derive_setters::Setters;

use crate::error::Error;

const DEFAULT_CHUNK_SIZE: usize = 512;

#[derive(Debug, Clone, Setters)]
pub struct CopyOptions {
    /// Replace the destination if it already exists
    overwrite: bool,

    /// Number of bytes transferred per read
    chunk_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self { overwrite: false, chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

impl crate::FileOps {
    /// Copies `src` to `dest`. Without `overwrite` an existing `dest` is an
    /// error.
    pub fn copy<T: AsRef<Path>, U: AsRef<Path>>(src: T, dest: U, overwrite: bool) -> Result<()> {
        Self::copy_with(src, dest, &CopyOptions::default().overwrite(overwrite))
    }

    /// Copies in `chunk_size` pieces. A failure part way leaves `dest`
    /// partially written.
    pub fn copy_with<T: AsRef<Path>, U: AsRef<Path>>(
        src: T,
        dest: U,
        options: &CopyOptions,
    ) -> Result<()> {
        let (src, dest) = (src.as_ref(), dest.as_ref());
        Self::enforce_constraints(src, dest, options)?;

        tracing::debug!(src = %src.display(), dest = %dest.display(), "Copying file");
        Self::transfer(src, dest, options.chunk_size)
            .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))
    }

    /// Moves `src` to `dest` as a copy followed by removal of `src`. If the
    /// removal fails both files are left in place.
    pub fn move_file<T: AsRef<Path>, U: AsRef<Path>>(
        src: T,
        dest: U,
        overwrite: bool,
    ) -> Result<()> {
        Self::move_file_with(src, dest, &CopyOptions::default().overwrite(overwrite))
    }

    pub fn move_file_with<T: AsRef<Path>, U: AsRef<Path>>(
        src: T,
        dest: U,
        options: &CopyOptions,
    ) -> Result<()> {
        let (src, dest) = (src.as_ref(), dest.as_ref());
        Self::enforce_constraints(src, dest, options)?;

        tracing::debug!(src = %src.display(), dest = %dest.display(), "Moving file");
        Self::transfer(src, dest, options.chunk_size)
            .with_context(|| format!("Failed to move {} to {}", src.display(), dest.display()))?;
        Self::remove_file(src)
    }

    // Paths are compared as given, so `a.txt` and `./a.txt` count as distinct.
    fn enforce_constraints(src: &Path, dest: &Path, options: &CopyOptions) -> Result<(), Error> {
        if src.as_os_str() == dest.as_os_str() {
            return Err(Error::IdenticalPaths(src.to_path_buf()));
        }

        if options.chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }

        if !options.overwrite && Self::exists(dest) {
            return Err(Error::AlreadyExists(dest.to_path_buf()));
        }

        Ok(())
    }

    fn transfer(src: &Path, dest: &Path, chunk_size: usize) -> Result<()> {
        let mut reader = Self::open_read_binary(src)?;
        let mut writer = Self::open_write_binary(dest)?;

        let mut chunk = vec![0u8; chunk_size];
        loop {
            let read = reader.read(&mut chunk).map_err(|error| Error::io(src, error))?;
            if read == 0 {
                break;
            }
            tracing::trace!(bytes = read, "Copying chunk");
            writer
                .write_all(&chunk[..read])
                .map_err(|error| Error::io(dest, error))?;
        }

        Ok(())
    }
}
