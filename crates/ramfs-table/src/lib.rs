//! Fixed-capacity flat file table over a bump arena.
//!
//! [`FileTable`] is an explicit context object: it owns the heap arena
//! and the slot array, and every operation goes through `&self` or
//! `&mut self`. There is no hidden global state, so independent tables
//! can coexist and tests are deterministic.
//!
//! # Architecture
//!
//! ```text
//! FileTable
//! ├── FileSlot × capacity (fixed at construction, linear scan)
//! │   └── Option<Block> content, exclusively owned by the slot
//! └── BumpArena (content buffers, never reclaimed)
//! ```
//!
//! # Write protocol
//!
//! A write to a new name claims the first free slot by ascending index
//! and moves it to [`SlotState::Staged`]. Only after the content buffer
//! has been secured does the slot become [`SlotState::Occupied`]. If the
//! arena is exhausted the staged slot reverts to [`SlotState::Free`], so
//! a failed write never leaves an occupied slot behind.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod slot;
pub mod table;

pub use config::{ConfigError, StorageConfig};
pub use slot::{FileSlot, SlotState};
pub use table::{FileEntry, FileTable};
