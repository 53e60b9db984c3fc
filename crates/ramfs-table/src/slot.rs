//! File slots and their occupancy state.

use ramfs_arena::Block;

/// Occupancy of a [`FileSlot`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlotState {
    /// The slot holds no file and may be claimed.
    #[default]
    Free,
    /// Claimed by an in-flight write whose content buffer is not yet
    /// secured. Never observable once a write returns.
    Staged,
    /// The slot holds a live file.
    Occupied,
}

/// One fixed-index entry of the file table.
///
/// When the slot is not occupied, every other field is in its cleared
/// state. When it is, `name` is non-empty and unique among occupied
/// slots, `size` is the exact content length, and `content` (present iff
/// `size > 0`) is owned by this slot alone.
#[derive(Debug, Default)]
pub struct FileSlot {
    name: String,
    /// Content buffer, `size + 1` bytes or more, zero-terminated.
    content: Option<Block>,
    size: usize,
    state: SlotState,
}

impl FileSlot {
    /// An empty slot whose name buffer is pre-sized to `name_budget` bytes.
    pub(crate) fn with_name_budget(name_budget: usize) -> Self {
        Self {
            name: String::with_capacity(name_budget),
            ..Self::default()
        }
    }

    /// The file name, or `""` if the slot is free.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current occupancy.
    pub fn state(&self) -> SlotState {
        self.state
    }

    /// Whether the slot holds a live file.
    pub fn is_occupied(&self) -> bool {
        self.state == SlotState::Occupied
    }

    /// Whether the slot can be claimed by a new name.
    pub fn is_free(&self) -> bool {
        self.state == SlotState::Free
    }

    /// The content buffer, if the file is non-empty.
    pub fn content(&self) -> Option<&Block> {
        self.content.as_ref()
    }

    /// Whether this slot is a live file called `name`.
    pub(crate) fn holds(&self, name: &str) -> bool {
        self.is_occupied() && self.name == name
    }

    /// Claim a free slot for `name` ahead of securing its content.
    pub(crate) fn stage(&mut self, name: &str) {
        debug_assert!(self.is_free(), "staging a slot that is not free");
        self.name.clear();
        self.name.push_str(name);
        self.state = SlotState::Staged;
    }

    /// Install `content` and mark the slot occupied.
    ///
    /// Returns the previous content buffer so the caller can release it.
    pub(crate) fn commit(&mut self, content: Option<Block>, size: usize) -> Option<Block> {
        debug_assert!(!self.is_free(), "committing a free slot");
        self.size = size;
        self.state = SlotState::Occupied;
        std::mem::replace(&mut self.content, content)
    }

    /// Return the slot to the free state.
    ///
    /// Returns the content buffer so the caller can release it.
    pub(crate) fn clear(&mut self) -> Option<Block> {
        self.name.clear();
        self.size = 0;
        self.state = SlotState::Free;
        self.content.take()
    }
}
