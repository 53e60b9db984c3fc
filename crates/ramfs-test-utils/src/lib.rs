//! Test utilities and mock types for ramfs development.
//!
//! Provides a mock implementation of [`FileStore`] for driving front
//! ends without a real table, and fixtures for building pre-populated
//! [`FileTable`](ramfs_table::FileTable)s.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use indexmap::IndexMap;
use ramfs_core::{FileStore, StorageError, StoreStats, TableLimits};

pub use fixtures::{filled_table, numbered_names, table_with_heap};

/// Mock implementation of [`FileStore`].
///
/// Backed by an `IndexMap<String, Vec<u8>>`. Enforces the name and size
/// limits of [`TableLimits`] but has no heap, so it never runs out of
/// memory unless told to. Queue failures with
/// [`fail_next`](MockFileStore::fail_next) to exercise error paths.
pub struct MockFileStore {
    files: IndexMap<String, Vec<u8>>,
    limits: TableLimits,
    failures: VecDeque<StorageError>,
    /// Every successful and failed `write` call, in order.
    writes: Vec<String>,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self::with_limits(TableLimits::default())
    }

    pub fn with_limits(limits: TableLimits) -> Self {
        Self {
            files: IndexMap::new(),
            limits,
            failures: VecDeque::new(),
            writes: Vec::new(),
        }
    }

    /// Pre-populate a file, bypassing validation.
    pub fn insert(&mut self, name: &str, content: &[u8]) {
        self.files.insert(name.to_owned(), content.to_vec());
    }

    /// Make the next `write` fail with `err` without touching the store.
    pub fn fail_next(&mut self, err: StorageError) {
        self.failures.push_back(err);
    }

    /// Names passed to `write`, in call order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Default for MockFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for MockFileStore {
    fn init(&mut self) {
        self.files.clear();
    }

    fn write(&mut self, name: &str, content: &[u8]) -> Result<(), StorageError> {
        self.writes.push(name.to_owned());
        if let Some(err) = self.failures.pop_front() {
            return Err(err);
        }
        if name.is_empty() || name.contains('\0') {
            return Err(StorageError::InvalidName);
        }
        if !self.limits.name_fits(name.len()) {
            return Err(StorageError::NameTooLong {
                len: name.len(),
                max: self.limits.max_name_len,
            });
        }
        if !self.limits.content_fits(content.len()) {
            return Err(StorageError::ContentTooLarge {
                len: content.len(),
                max: self.limits.max_content_size,
            });
        }
        if !self.files.contains_key(name) && self.files.len() >= self.limits.capacity {
            return Err(StorageError::StorageFull {
                capacity: self.limits.capacity,
            });
        }
        self.files.insert(name.to_owned(), content.to_vec());
        Ok(())
    }

    fn read(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(|v| v.as_slice())
    }

    fn delete(&mut self, name: &str) -> Result<(), StorageError> {
        self.files
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                name: name.to_owned(),
            })
    }

    fn list(&self, visit: &mut dyn FnMut(&str, usize)) {
        for (name, content) in &self.files {
            visit(name, content.len());
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn count(&self) -> usize {
        self.files.len()
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            files: self.files.len(),
            capacity: self.limits.capacity,
            content_bytes: self.files.values().map(Vec::len).sum(),
            ..StoreStats::default()
        }
    }
}
