//! The storage interface consumed by front ends.

use crate::error::StorageError;
use crate::stats::StoreStats;

/// A flat, name-addressed file store.
///
/// Implemented by `ramfs_table::FileTable`. Front ends such as the shell
/// depend only on this trait, so they can be driven by a mock in tests.
///
/// Mutating operations take `&mut self`; a slice returned by
/// [`read`](FileStore::read) therefore cannot outlive the next write or
/// delete.
pub trait FileStore {
    /// Clear every file. Previously stored content is discarded.
    fn init(&mut self);

    /// Create `name` with `content`, or replace the content of an existing
    /// file of that name.
    ///
    /// On failure the store is left exactly as it was.
    fn write(&mut self, name: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Borrow the current content of `name`, or `None` if absent.
    fn read(&self, name: &str) -> Option<&[u8]>;

    /// Remove `name`.
    ///
    /// Returns [`StorageError::NotFound`] if no such file exists.
    fn delete(&mut self, name: &str) -> Result<(), StorageError>;

    /// Call `visit(name, size)` for every file in slot order.
    fn list(&self, visit: &mut dyn FnMut(&str, usize));

    /// Whether a file named `name` exists.
    fn exists(&self, name: &str) -> bool;

    /// Number of files currently stored.
    fn count(&self) -> usize;

    /// Occupancy and heap diagnostics.
    fn stats(&self) -> StoreStats;
}
