//! Error types for file table operations.
//!
//! Every failure is a value returned to the immediate caller. None of
//! them abort, and all are recoverable: a front end reports the error
//! and keeps serving commands.

use std::error::Error;
use std::fmt;

/// Errors returned by [`FileStore`](crate::FileStore) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The name is empty or contains a NUL byte.
    InvalidName,
    /// The name does not fit the name budget (terminator included).
    NameTooLong {
        /// Length of the rejected name in bytes.
        len: usize,
        /// The configured bound, terminator included.
        max: usize,
    },
    /// The content exceeds the per-file size limit.
    ContentTooLarge {
        /// Length of the rejected content in bytes.
        len: usize,
        /// The largest accepted content length.
        max: usize,
    },
    /// Every slot is occupied and the name is not already present.
    StorageFull {
        /// Number of slots in the table.
        capacity: usize,
    },
    /// No occupied slot carries this name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// The heap arena cannot satisfy the content buffer request.
    OutOfMemory {
        /// Bytes requested from the arena, after alignment.
        requested: usize,
        /// Bytes left in the arena at the time of the request.
        remaining: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "invalid file name"),
            Self::NameTooLong { len, max } => {
                write!(f, "file name is {len} bytes, limit is {} bytes", max - 1)
            }
            Self::ContentTooLarge { len, max } => {
                write!(f, "content is {len} bytes, limit is {max} bytes")
            }
            Self::StorageFull { capacity } => {
                write!(f, "file table full ({capacity} files)")
            }
            Self::NotFound { name } => write!(f, "file '{name}' not found"),
            Self::OutOfMemory {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
        }
    }
}

impl Error for StorageError {}
