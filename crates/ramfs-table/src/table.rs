//! The flat file table.
//!
//! Lookups are linear scans over the slot array. The array is small and
//! its size is fixed, and scanning keeps [`FileTable::list`] in slot
//! order: a name that reuses a freed slot lists at that slot's position,
//! not at the end.

use ramfs_arena::{ArenaError, Block, BumpArena};
use ramfs_core::{FileStore, StorageError, StoreStats, TableLimits};
use tracing::{debug, warn};

use crate::config::{ConfigError, StorageConfig};
use crate::slot::FileSlot;

/// A live file as seen by [`FileTable::iter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileEntry<'a> {
    /// Slot index holding the file.
    pub index: usize,
    /// The file name.
    pub name: &'a str,
    /// Content length in bytes.
    pub size: usize,
}

/// Fixed-capacity name → content table backed by a bump arena.
///
/// Each content buffer is carved from the table's own [`BumpArena`] and
/// owned by exactly one slot. Overwriting or deleting a file drops the
/// slot's reference but never returns the bytes to the arena, so
/// sustained churn eventually exhausts the heap and writes fail with
/// [`StorageError::OutOfMemory`].
pub struct FileTable {
    /// Exactly `limits.capacity` slots, allocated once.
    slots: Vec<FileSlot>,
    arena: BumpArena,
    limits: TableLimits,
    /// Writes that reverted a staged slot.
    rollbacks: u64,
}

impl FileTable {
    /// Build a table from a validated configuration.
    pub fn new(config: StorageConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = BumpArena::new(config.arena)?;
        let limits = config.limits;
        let slots = (0..limits.capacity)
            .map(|_| FileSlot::with_name_budget(limits.max_name_len))
            .collect();
        debug!(
            capacity = limits.capacity,
            heap = arena.capacity(),
            "file table created"
        );
        Ok(Self {
            slots,
            arena,
            limits,
            rollbacks: 0,
        })
    }

    /// Clear every slot.
    ///
    /// Existing files are discarded without warning. The arena is not
    /// reset: bytes vended for the discarded content stay consumed.
    pub fn init(&mut self) {
        for slot in &mut self.slots {
            if let Some(block) = slot.clear() {
                self.arena.release(block);
            }
        }
        debug!(capacity = self.slots.len(), "file table cleared");
    }

    /// Create `name` with `content`, or overwrite an existing file.
    ///
    /// A new name takes the first free slot by ascending index; an
    /// existing name keeps its slot. On any error the table is unchanged:
    /// a newly staged slot is rolled back, and an existing file keeps its
    /// previous content.
    pub fn write(&mut self, name: &str, content: &[u8]) -> Result<(), StorageError> {
        self.check_name(name)?;
        if !self.limits.content_fits(content.len()) {
            return Err(StorageError::ContentTooLarge {
                len: content.len(),
                max: self.limits.max_content_size,
            });
        }

        let (index, staged) = match self.position(name) {
            Some(index) => (index, false),
            None => {
                let Some(index) = self.slots.iter().position(FileSlot::is_free) else {
                    warn!(name, capacity = self.slots.len(), "file table full");
                    return Err(StorageError::StorageFull {
                        capacity: self.slots.len(),
                    });
                };
                self.slots[index].stage(name);
                debug!(index, name, "staged slot");
                (index, true)
            }
        };

        let block = match self.store(content) {
            Ok(block) => block,
            Err(err) => {
                if staged {
                    let _ = self.slots[index].clear();
                    self.rollbacks += 1;
                    warn!(index, name, error = %err, "rolled back staged slot");
                }
                return Err(err);
            }
        };

        if let Some(old) = self.slots[index].commit(block, content.len()) {
            self.arena.release(old);
        }
        debug!(index, name, size = content.len(), staged, "committed file");
        Ok(())
    }

    /// Borrow the content of `name`, or `None` if it does not exist.
    ///
    /// The slice excludes the stored terminator.
    pub fn read(&self, name: &str) -> Option<&[u8]> {
        let slot = &self.slots[self.position(name)?];
        match slot.content() {
            Some(block) => self.arena.bytes(block).map(|bytes| &bytes[..slot.size()]),
            None => Some(&[][..]),
        }
    }

    /// Remove `name`, freeing its slot for reuse.
    pub fn delete(&mut self, name: &str) -> Result<(), StorageError> {
        let Some(index) = self.position(name) else {
            return Err(StorageError::NotFound {
                name: name.to_owned(),
            });
        };
        if let Some(block) = self.slots[index].clear() {
            self.arena.release(block);
        }
        debug!(index, name, "deleted file");
        Ok(())
    }

    /// Call `visit(name, size)` for every file in ascending slot order.
    pub fn list(&self, mut visit: impl FnMut(&str, usize)) {
        for entry in self.iter() {
            visit(entry.name, entry.size);
        }
    }

    /// Iterate over live files in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = FileEntry<'_>> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_occupied())
            .map(|(index, slot)| FileEntry {
                index,
                name: slot.name(),
                size: slot.size(),
            })
    }

    /// Whether a file named `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of live files.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Slot index holding `name`, if it exists.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.holds(name))
    }

    /// The slot at `index`, occupied or not.
    pub fn slot(&self, index: usize) -> Option<&FileSlot> {
        self.slots.get(index)
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The admission limits fixed at construction.
    pub fn limits(&self) -> &TableLimits {
        &self.limits
    }

    /// Read-only view of the backing arena, for diagnostics.
    pub fn arena(&self) -> &BumpArena {
        &self.arena
    }

    /// Occupancy and heap diagnostics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            files: self.count(),
            capacity: self.slots.len(),
            content_bytes: self.iter().map(|entry| entry.size).sum(),
            heap_used: self.arena.used(),
            heap_capacity: self.arena.capacity(),
            allocated_bytes: self.arena.allocated_bytes(),
            rollbacks: self.rollbacks,
        }
    }

    fn check_name(&self, name: &str) -> Result<(), StorageError> {
        if name.is_empty() || name.contains('\0') {
            return Err(StorageError::InvalidName);
        }
        if !self.limits.name_fits(name.len()) {
            return Err(StorageError::NameTooLong {
                len: name.len(),
                max: self.limits.max_name_len,
            });
        }
        Ok(())
    }

    /// Copy `content` into a fresh, zero-terminated arena buffer.
    ///
    /// Empty content needs no buffer.
    fn store(&mut self, content: &[u8]) -> Result<Option<Block>, StorageError> {
        if content.is_empty() {
            return Ok(None);
        }
        let block = self
            .arena
            .allocate(content.len() + 1)
            .map_err(|e| out_of_memory(e, self.arena.remaining()))?;
        let bytes = block.as_ref().and_then(|b| self.arena.bytes_mut(b));
        debug_assert!(bytes.is_some(), "fresh block does not resolve");
        if let Some(bytes) = bytes {
            bytes[..content.len()].copy_from_slice(content);
            bytes[content.len()] = 0;
        }
        Ok(block)
    }
}

fn out_of_memory(err: ArenaError, remaining: usize) -> StorageError {
    match err {
        ArenaError::OutOfMemory {
            requested,
            remaining,
        } => StorageError::OutOfMemory {
            requested,
            remaining,
        },
        _ => StorageError::OutOfMemory {
            requested: usize::MAX,
            remaining,
        },
    }
}

impl FileStore for FileTable {
    fn init(&mut self) {
        FileTable::init(self);
    }

    fn write(&mut self, name: &str, content: &[u8]) -> Result<(), StorageError> {
        FileTable::write(self, name, content)
    }

    fn read(&self, name: &str) -> Option<&[u8]> {
        FileTable::read(self, name)
    }

    fn delete(&mut self, name: &str) -> Result<(), StorageError> {
        FileTable::delete(self, name)
    }

    fn list(&self, visit: &mut dyn FnMut(&str, usize)) {
        FileTable::list(self, visit);
    }

    fn exists(&self, name: &str) -> bool {
        FileTable::exists(self, name)
    }

    fn count(&self) -> usize {
        FileTable::count(self)
    }

    fn stats(&self) -> StoreStats {
        FileTable::stats(self)
    }
}
