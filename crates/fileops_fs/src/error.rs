use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for file operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Source and destination files cannot be identical: {0}")]
    IdenticalPaths(PathBuf),

    #[error("Copy chunk size must be greater than zero")]
    InvalidChunkSize,

    #[error("The file '{0}' exists and cannot be overwritten")]
    AlreadyExists(PathBuf),

    #[error("No such file or directory: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0}")]
    AccessDenied(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Failed to {action} {path} as {encoding}")]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
        action: EncodingAction,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Direction of a failed text conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingAction {
    Decode,
    Encode,
}

impl std::fmt::Display for EncodingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingAction::Decode => write!(f, "decode"),
            EncodingAction::Encode => write!(f, "encode"),
        }
    }
}

impl Error {
    /// Classifies an I/O failure on `path` into the error taxonomy.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path),
            io::ErrorKind::PermissionDenied => Error::AccessDenied(path),
            io::ErrorKind::AlreadyExists => Error::AlreadyExists(path),
            _ => Error::Io { path, source },
        }
    }
}
