//! Table fixtures shared by tests and benchmarks.

use ramfs_table::{FileTable, StorageConfig};

/// `f0`, `f1`, ... `f{n-1}`.
pub fn numbered_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("f{i}")).collect()
}

/// A reference-sized table over a heap of `bytes` bytes.
pub fn table_with_heap(bytes: usize) -> FileTable {
    FileTable::new(StorageConfig::with_heap_size(bytes)).expect("reference config is valid")
}

/// A default table holding `n` files named by [`numbered_names`], each
/// with one byte of content.
///
/// # Panics
///
/// Panics if `n` exceeds the table capacity.
pub fn filled_table(n: usize) -> FileTable {
    let mut table =
        FileTable::new(StorageConfig::default()).expect("reference config is valid");
    for name in numbered_names(n) {
        table.write(&name, b"x").expect("fixture write fits");
    }
    table
}
