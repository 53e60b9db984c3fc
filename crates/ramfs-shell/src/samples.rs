//! Files written at boot so a fresh shell has something to show.

use ramfs_core::{FileStore, StorageError};
use tracing::info;

/// Boot sample files, as `(name, content)`.
pub const SAMPLE_FILES: [(&str, &str); 3] = [
    ("welcome.txt", "Welcome to ramfs! This is a sample file."),
    (
        "readme.txt",
        "ramfs is a RAM-resident file table over a bump-allocated heap.",
    ),
    ("about.txt", "Built for learning OS development concepts."),
];

/// Write every sample file into `store`.
///
/// Stops at the first failure.
pub fn seed_samples<S: FileStore + ?Sized>(store: &mut S) -> Result<(), StorageError> {
    for (name, content) in SAMPLE_FILES {
        store.write(name, content.as_bytes())?;
        info!(name, size = content.len(), "created sample file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramfs_table::{FileTable, StorageConfig};

    #[test]
    fn seeds_in_order() {
        let mut table = FileTable::new(StorageConfig::default()).unwrap();
        seed_samples(&mut table).unwrap();
        let names: Vec<_> = table.iter().map(|e| e.name).collect();
        assert_eq!(names, ["welcome.txt", "readme.txt", "about.txt"]);
        assert_eq!(
            table.read("about.txt"),
            Some("Built for learning OS development concepts.".as_bytes())
        );
    }

    #[test]
    fn stops_at_first_failure() {
        // One 48-byte buffer: welcome.txt fits, readme.txt does not.
        let mut table = FileTable::new(StorageConfig::with_heap_size(48)).unwrap();
        assert!(matches!(
            seed_samples(&mut table),
            Err(StorageError::OutOfMemory { .. })
        ));
        assert_eq!(table.count(), 1);
    }
}
