//! Line-oriented command shell over a ramfs file store.
//!
//! The shell reads one line at a time from a [`Console`], splits it into
//! at most [`MAX_ARGS`] arguments, and dispatches to a command that talks
//! to any [`FileStore`](ramfs_core::FileStore). The `ramfs` binary wires
//! it to stdin and stdout over a [`FileTable`](ramfs_table::FileTable).
//!
//! ```
//! use ramfs_shell::{seed_samples, Shell, StdConsole};
//! use ramfs_table::{FileTable, StorageConfig};
//!
//! let mut table = FileTable::new(StorageConfig::default()).unwrap();
//! seed_samples(&mut table).unwrap();
//!
//! let mut shell = Shell::new(table);
//! let mut console = StdConsole::new(&b"ls\n"[..], Vec::new());
//! shell.run(&mut console).unwrap();
//!
//! let out = String::from_utf8(console.into_output()).unwrap();
//! assert!(out.contains("  welcome.txt ("));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod console;
pub mod samples;
pub mod shell;

pub use command::{parse_args, Args, Command, UsageError, MAX_ARGS};
pub use console::{read_line, Console, StdConsole, MAX_COMMAND_LEN};
pub use samples::{seed_samples, SAMPLE_FILES};
pub use shell::{Shell, BANNER, PROMPT};
