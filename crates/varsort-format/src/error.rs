//! Error types for record file operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for record file operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, sorting, or writing record files
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened
    #[error("cannot open input file {path}: {source}")]
    CannotOpenInput { path: PathBuf, source: io::Error },

    /// The output file could not be created
    #[error("cannot open output file {path}: {source}")]
    CannotOpenOutput { path: PathBuf, source: io::Error },

    /// The input ended before the bytes its headers declared
    #[error("truncated input while reading {context}")]
    TruncatedInput { context: &'static str },

    /// A record declared more payload elements than the format allows
    #[error("payload length {declared} exceeds maximum of {max} elements")]
    PayloadTooLarge { declared: u32, max: u32 },

    /// The sink accepted fewer bytes than were requested
    #[error("short write while writing {context}")]
    ShortWrite { context: &'static str },

    /// A collection holds more records than the 4-byte count header can
    /// represent
    #[error("collection of {count} records exceeds the u32 count header")]
    TooManyRecords { count: usize },

    /// An allocation sized from file contents was refused
    #[error("out of memory allocating {elements} elements")]
    OutOfMemory { elements: usize },

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Map an I/O error raised while reading `context` to the taxonomy.
    ///
    /// `read_exact` reports running out of bytes as `UnexpectedEof`; every
    /// other kind is a genuine I/O failure.
    pub(crate) fn on_read(err: io::Error, context: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::TruncatedInput { context }
        } else {
            Self::Io(err)
        }
    }

    /// Map an I/O error raised while writing `context` to the taxonomy.
    ///
    /// `write_all` reports a sink that stopped accepting bytes as
    /// `WriteZero`.
    pub(crate) fn on_write(err: io::Error, context: &'static str) -> Self {
        if err.kind() == io::ErrorKind::WriteZero {
            Self::ShortWrite { context }
        } else {
            Self::Io(err)
        }
    }
}
