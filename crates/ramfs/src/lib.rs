//! ramfs: a RAM-resident flat file table over a bump-allocated heap.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ramfs sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use ramfs::prelude::*;
//!
//! let mut fs = FileTable::new(StorageConfig::default()).unwrap();
//! fs.write("a.txt", b"hi").unwrap();
//! fs.write("a.txt", b"hello").unwrap();
//! assert_eq!(fs.read("a.txt"), Some(&b"hello"[..]));
//!
//! fs.delete("a.txt").unwrap();
//! assert_eq!(
//!     fs.delete("a.txt"),
//!     Err(StorageError::NotFound { name: "a.txt".into() })
//! );
//!
//! // Overwrites never give heap back.
//! assert_eq!(fs.stats().allocated_bytes, 32);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ramfs-core` | Limits, `StorageError`, `StoreStats`, the `FileStore` trait |
//! | [`arena`] | `ramfs-arena` | `BumpArena`, `Block` handles, `ArenaConfig` |
//! | [`table`] | `ramfs-table` | `FileTable`, slots, `StorageConfig` |
//! | [`shell`] | `ramfs-shell` | Console, command parsing, the interactive `Shell` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core limits, errors, and the [`types::FileStore`] trait (`ramfs-core`).
pub use ramfs_core as types;

/// Non-reclaiming bump arena (`ramfs-arena`).
///
/// [`arena::BumpArena`] vends 16-byte aligned [`arena::Block`] handles
/// scoped to the arena generation that produced them.
pub use ramfs_arena as arena;

/// The flat file table (`ramfs-table`).
pub use ramfs_table as table;

/// Line-oriented shell over any file store (`ramfs-shell`).
pub use ramfs_shell as shell;

/// Common imports for typical ramfs usage.
///
/// ```rust
/// use ramfs::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use ramfs_core::{FileStore, StorageError, StoreStats, TableLimits};

    // Arena
    pub use ramfs_arena::{ArenaConfig, ArenaError, BumpArena};

    // Table
    pub use ramfs_table::{ConfigError, FileTable, StorageConfig};

    // Shell
    pub use ramfs_shell::{Console, Shell, StdConsole};
}
