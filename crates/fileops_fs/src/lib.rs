//! # FileOps
//!
//! Whole-file operations over the local filesystem: read, write, append,
//! copy, move, delete and existence checks.
//!
//! FileOps wraps `std::fs` with consistent error reporting. Failures are
//! classified into [`Error`] and carried inside an `anyhow::Error`, so callers
//! that only want a message get one in the form "Failed to [operation]
//! [path]", while callers that need to branch can
//! `downcast_ref::<fileops_fs::Error>()`. Every handle is owned by the
//! operation that opens it and is closed before that operation returns.

mod copy;
mod encoding;
mod error;
mod meta;
mod open;
mod read;
mod remove;
mod write;

pub use copy::CopyOptions;
pub use encoding::TextEncoding;
pub use error::{EncodingAction, Error};

/// Stateless entry point for all file operations.
pub struct FileOps;
