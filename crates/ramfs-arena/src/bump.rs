//! The bump allocator.
//!
//! [`BumpArena`] is a contiguous `Vec<u8>` with a cursor that advances on
//! each allocation. The cursor only moves forward until the next
//! [`init`](BumpArena::init); there is no free list and no reclaim path.

use tracing::{debug, trace, warn};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Block;

/// Granularity of every allocation, in bytes.
pub const ALIGNMENT: usize = 16;

/// Round `size` up to the next multiple of [`ALIGNMENT`].
///
/// Returns `None` if the rounded value does not fit in `usize`.
pub fn align_up(size: usize) -> Option<usize> {
    size.checked_add(ALIGNMENT - 1).map(|padded| padded & !(ALIGNMENT - 1))
}

/// A fixed-size, non-reclaiming heap.
///
/// Invariants, for the lifetime of a generation:
/// - `start <= current <= end`
/// - `current` only increases
/// - `total_allocated` is the sum of every aligned size vended and never
///   decreases
pub struct BumpArena {
    /// Backing storage, `end - start` bytes. Allocated in full at init.
    data: Vec<u8>,
    start: usize,
    end: usize,
    /// Bump pointer: logical address of the next free byte.
    current: usize,
    total_allocated: usize,
    /// Advanced by every `init`; stamps each vended block.
    generation: u32,
}

impl BumpArena {
    /// Create an arena over the bounds in `config`.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let data = zeroed_buffer(config.size())?;
        debug!(
            start = config.start,
            end = config.end,
            size = config.size(),
            "heap arena created"
        );
        Ok(Self {
            data,
            start: config.start,
            end: config.end,
            current: config.start,
            total_allocated: 0,
            generation: 0,
        })
    }

    /// Reset the arena to cover `[start, end)`.
    ///
    /// The cursor returns to `start` and `allocated_bytes` to zero. Blocks
    /// vended before this call belong to an older generation and no
    /// longer resolve. On error the arena is left untouched.
    pub fn init(&mut self, start: usize, end: usize) -> Result<(), ArenaError> {
        let config = ArenaConfig::new(start, end);
        config.validate()?;
        self.data = zeroed_buffer(config.size())?;
        self.start = start;
        self.end = end;
        self.current = start;
        self.total_allocated = 0;
        self.generation = self.generation.wrapping_add(1);
        debug!(
            start,
            end,
            generation = self.generation,
            "heap arena reinitialised"
        );
        Ok(())
    }

    /// Bump-allocate `size` bytes, rounded up to [`ALIGNMENT`].
    ///
    /// A zero-byte request is a valid no-op and returns `Ok(None)` without
    /// consuming space. The contents of a fresh block are unspecified.
    pub fn allocate(&mut self, size: usize) -> Result<Option<Block>, ArenaError> {
        if size == 0 {
            return Ok(None);
        }
        let remaining = self.remaining();
        let aligned = match align_up(size) {
            Some(aligned) if aligned <= remaining => aligned,
            aligned => {
                let requested = aligned.unwrap_or(usize::MAX);
                warn!(size, requested, remaining, "heap arena exhausted");
                return Err(ArenaError::OutOfMemory {
                    requested,
                    remaining,
                });
            }
        };

        let addr = self.current;
        self.current += aligned;
        self.total_allocated += aligned;
        trace!(addr, size, aligned, "allocated block");
        Ok(Some(Block::new(self.generation, addr, aligned)))
    }

    /// Allocate room for `count` elements of `size` bytes, zero-filled.
    ///
    /// The product is checked: an overflowing request fails with
    /// [`ArenaError::SizeOverflow`] instead of wrapping. Exhaustion is
    /// reported as from [`allocate`](Self::allocate).
    pub fn zero_allocate(
        &mut self,
        count: usize,
        size: usize,
    ) -> Result<Option<Block>, ArenaError> {
        let Some(total) = count.checked_mul(size) else {
            warn!(count, size, "zeroed allocation size overflows");
            return Err(ArenaError::SizeOverflow { count, size });
        };
        let block = self.allocate(total)?;
        if let Some(block) = &block {
            if let Some(bytes) = self.bytes_mut(block) {
                bytes.fill(0);
            }
        }
        Ok(block)
    }

    /// Hand a block back to the arena.
    ///
    /// This is a no-op: the bump allocator never reclaims. The range stays
    /// consumed and no other block is affected. Callers still release the
    /// blocks they are done with so ownership ends explicitly.
    pub fn release(&self, _block: Block) {}

    /// Shared view of a live block's bytes.
    ///
    /// Returns `None` for a block from an earlier generation.
    pub fn bytes(&self, block: &Block) -> Option<&[u8]> {
        let range = self.resolve(block)?;
        self.data.get(range)
    }

    /// Mutable view of a live block's bytes.
    ///
    /// Returns `None` for a block from an earlier generation.
    pub fn bytes_mut(&mut self, block: &Block) -> Option<&mut [u8]> {
        let range = self.resolve(block)?;
        self.data.get_mut(range)
    }

    /// Total bytes vended since the last init, alignment included.
    ///
    /// Diagnostic only: it never decreases, even when the caller has
    /// stopped using every block.
    pub fn allocated_bytes(&self) -> usize {
        self.total_allocated
    }

    /// Bytes between `start` and the cursor.
    pub fn used(&self) -> usize {
        self.current - self.start
    }

    /// Bytes between the cursor and `end`.
    pub fn remaining(&self) -> usize {
        self.end - self.current
    }

    /// Total heap size in bytes.
    pub fn capacity(&self) -> usize {
        self.end - self.start
    }

    /// First address of the heap.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last address of the heap.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Logical address of the next allocation.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Current generation, advanced by each [`init`](Self::init).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn resolve(&self, block: &Block) -> Option<std::ops::Range<usize>> {
        if block.generation != self.generation {
            return None;
        }
        let offset = block.addr.checked_sub(self.start)?;
        Some(offset..offset.checked_add(block.len)?)
    }
}

/// A zero-filled buffer of `size` bytes, or `HeapTooLarge` if it cannot
/// be reserved.
fn zeroed_buffer(size: usize) -> Result<Vec<u8>, ArenaError> {
    let mut data = Vec::new();
    if data.try_reserve_exact(size).is_err() {
        warn!(size, "heap buffer reservation failed");
        return Err(ArenaError::HeapTooLarge { size });
    }
    data.resize(size, 0);
    Ok(data)
}
