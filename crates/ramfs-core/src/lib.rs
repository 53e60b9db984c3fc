//! Core types and traits for the ramfs storage layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the table sizing constants, the storage error taxonomy, and the
//! [`FileStore`] trait that front ends program against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod limits;
pub mod stats;
pub mod traits;

pub use error::StorageError;
pub use limits::TableLimits;
pub use stats::StoreStats;
pub use traits::FileStore;
