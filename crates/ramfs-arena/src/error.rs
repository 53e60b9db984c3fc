//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The aligned request does not fit between the cursor and the end
    /// of the heap.
    OutOfMemory {
        /// Number of bytes requested, after 16-byte alignment. Saturates
        /// at `usize::MAX` when alignment itself overflows.
        requested: usize,
        /// Bytes left between the cursor and the end of the heap.
        remaining: usize,
    },
    /// `count * size` for a zeroed allocation overflows `usize`.
    SizeOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of each element in bytes.
        size: usize,
    },
    /// Heap bounds with `start > end`.
    InvalidBounds {
        /// The requested start address.
        start: usize,
        /// The requested end address.
        end: usize,
    },
    /// The backing buffer for the heap could not be reserved.
    HeapTooLarge {
        /// The requested heap size in bytes.
        size: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena out of memory: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::SizeOverflow { count, size } => {
                write!(f, "allocation size overflow: {count} x {size} bytes")
            }
            Self::InvalidBounds { start, end } => {
                write!(f, "invalid heap bounds: start {start:#x} is past end {end:#x}")
            }
            Self::HeapTooLarge { size } => {
                write!(f, "cannot reserve a heap of {size} bytes")
            }
        }
    }
}

impl Error for ArenaError {}
