//! Whole-file utilities for the local filesystem.
//!
//! - [`FileOps`]: read, write, append, copy, move, delete and existence checks
//! - [`Walker`] and [`enumerate`]: recursive enumeration of regular files
//! - [`histogram`] and [`words`]: word statistics over a text file
//!
//! Every operation runs synchronously on the calling thread and returns an
//! `anyhow::Result`; use `downcast_ref::<Error>()` to tell failures apart.

pub use fileops_fs::{CopyOptions, EncodingAction, Error, FileOps, TextEncoding};
pub use fileops_text::{histogram, histogram_with_encoding, tokens, words, words_with_encoding};
pub use fileops_walker::{enumerate, Walker};
