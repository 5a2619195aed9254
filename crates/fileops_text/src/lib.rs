//! Word statistics over the lines of a text file.

mod histogram;
mod words;

pub use histogram::*;
pub use words::*;
