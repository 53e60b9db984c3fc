//! Heap bounds for the arena.

use crate::error::ArenaError;

/// Logical address range managed by a [`BumpArena`](crate::BumpArena).
///
/// The host decides where the heap lives. Addresses are only used for
/// bookkeeping and for [`Block::addr`](crate::Block::addr); the arena
/// backs the range with its own buffer of `end - start` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// First address of the heap.
    pub start: usize,
    /// One past the last address of the heap.
    pub end: usize,
}

impl ArenaConfig {
    /// Default heap size: 1 MiB.
    pub const DEFAULT_HEAP_SIZE: usize = 1 << 20;

    /// Default base address of the heap.
    pub const DEFAULT_HEAP_START: usize = 0x4000_0000;

    /// A heap covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A heap of `size` bytes at the default base address.
    ///
    /// Saturates at the top of the address space.
    pub fn with_size(size: usize) -> Self {
        let start = Self::DEFAULT_HEAP_START;
        Self {
            start,
            end: start.saturating_add(size),
        }
    }

    /// Heap size in bytes, or zero for inverted bounds.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check that `start <= end`.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.start > self.end {
            return Err(ArenaError::InvalidBounds {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::with_size(Self::DEFAULT_HEAP_SIZE)
    }
}
