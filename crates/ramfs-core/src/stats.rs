//! Point-in-time diagnostics for a file store.

/// Occupancy and heap usage of a file store.
///
/// Values are a snapshot taken by [`FileStore::stats`](crate::FileStore::stats).
/// `allocated_bytes` is monotonic for the lifetime of the heap and is not a
/// measure of live data: overwritten and deleted content is never reclaimed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of occupied slots.
    pub files: usize,
    /// Total number of slots.
    pub capacity: usize,
    /// Sum of the content sizes of all live files, in bytes.
    pub content_bytes: usize,
    /// Bytes consumed from the heap so far.
    pub heap_used: usize,
    /// Total heap size in bytes.
    pub heap_capacity: usize,
    /// Sum of every aligned allocation ever made.
    pub allocated_bytes: usize,
    /// Number of writes that rolled back a staged slot.
    pub rollbacks: u64,
}

impl StoreStats {
    /// Slots still available for new names.
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.files)
    }

    /// Heap bytes not yet handed out.
    pub fn heap_remaining(&self) -> usize {
        self.heap_capacity.saturating_sub(self.heap_used)
    }
}
