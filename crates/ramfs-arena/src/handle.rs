//! Block handles.
//!
//! A [`Block`] names an aligned byte range inside the arena. It is
//! generation-scoped: the `generation` field allows O(1) staleness
//! checks after the arena has been re-initialised.

use std::fmt;

/// Exclusive handle to a range vended by [`BumpArena`](crate::BumpArena).
///
/// `Block` is neither `Clone` nor `Copy`: whoever holds it
/// owns the range, and [`BumpArena::release`](crate::BumpArena::release)
/// consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct Block {
    /// Arena generation when this block was vended.
    pub(crate) generation: u32,
    /// Logical address of the first byte.
    pub(crate) addr: usize,
    /// Length of the range in bytes (a multiple of 16).
    pub(crate) len: usize,
}

impl Block {
    pub(crate) fn new(generation: u32, addr: usize, len: usize) -> Self {
        Self {
            generation,
            addr,
            len,
        }
    }

    /// The generation this block belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Logical address of the first byte.
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Aligned length of the range in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the range is empty. Never true for a vended block.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last address of the range.
    pub fn end(&self) -> usize {
        self.addr + self.len
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block(gen={}, addr={:#x}, len={})",
            self.generation, self.addr, self.len
        )
    }
}
