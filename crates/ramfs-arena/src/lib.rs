//! Non-reclaiming bump arena backing ramfs file content.
//!
//! The arena owns one contiguous byte region described by logical
//! `[start, end)` bounds supplied by the host. Allocation advances a
//! single cursor in 16-byte steps and never moves it back: individual
//! blocks are never reclaimed. [`BumpArena::release`] exists so callers
//! can state that they are done with a block, and does nothing.
//!
//! ```text
//! start                     current                      end
//!   |--- vended blocks ---->|------- remaining --------->|
//! ```
//!
//! Blocks are handed out as [`Block`] handles rather than addresses.
//! A handle is scoped to the arena generation that produced it, and
//! every [`BumpArena::init`] starts a new generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bump;
pub mod config;
pub mod error;
pub mod handle;

pub use bump::{align_up, BumpArena, ALIGNMENT};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Block;
