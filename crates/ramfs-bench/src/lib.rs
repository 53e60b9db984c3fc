//! Benchmark workloads for the ramfs arena and file table.
//!
//! - [`churn_script`]: deterministic overwrite/delete sequence over a
//!   bounded name pool
//! - [`replay`]: drive a [`FileStore`] through a script, counting failures
//! - [`sized_content`]: printable content of an exact length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ramfs_core::limits::MAX_FILE_SIZE;
use ramfs_core::FileStore;

/// One step of a benchmark script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Create or overwrite `name` with `len` bytes.
    Write { name: String, len: usize },
    /// Delete `name`.
    Delete { name: String },
}

/// Printable bytes of length `len`, capped at [`MAX_FILE_SIZE`].
pub fn sized_content(len: usize) -> Vec<u8> {
    (0..len.min(MAX_FILE_SIZE))
        .map(|i| b'a' + (i % 26) as u8)
        .collect()
}

/// A deterministic script of `steps` operations over `names` distinct
/// names.
///
/// Every seventh step is a delete; the rest write content whose length
/// cycles through 0..`max_len`. A small linear congruential generator
/// picks names, so the same arguments always yield the same script.
pub fn churn_script(steps: usize, names: usize, max_len: usize) -> Vec<Step> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..steps)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let name = format!("file{}", (state >> 33) as usize % names.max(1));
            if i % 7 == 6 {
                Step::Delete { name }
            } else {
                Step::Write {
                    name,
                    len: i % max_len.max(1),
                }
            }
        })
        .collect()
}

/// Run `script` against `store`, returning how many steps failed.
pub fn replay<S: FileStore + ?Sized>(store: &mut S, script: &[Step]) -> usize {
    let mut failures = 0;
    for step in script {
        let result = match step {
            Step::Write { name, len } => store.write(name, &sized_content(*len)),
            Step::Delete { name } => store.delete(name),
        };
        if result.is_err() {
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramfs_table::{FileTable, StorageConfig};

    #[test]
    fn scripts_are_deterministic() {
        assert_eq!(churn_script(100, 10, 64), churn_script(100, 10, 64));
    }

    #[test]
    fn content_has_exact_length() {
        assert_eq!(sized_content(0).len(), 0);
        assert_eq!(sized_content(30).len(), 30);
        assert_eq!(&sized_content(3), b"abc");
        assert_eq!(sized_content(10_000).len(), MAX_FILE_SIZE);
    }

    #[test]
    fn replay_on_large_heap_only_fails_missing_deletes() {
        let mut table = FileTable::new(StorageConfig::default()).unwrap();
        let script = churn_script(200, 16, 32);
        let failures = replay(&mut table, &script);
        let deletes = script
            .iter()
            .filter(|s| matches!(s, Step::Delete { .. }))
            .count();
        assert!(failures <= deletes);
        assert!(table.count() <= 16);
    }
}
