//! Fixed sizing of the file table.

/// Maximum number of files the table can hold.
pub const MAX_FILES: usize = 32;

/// Maximum file name length, including the terminator budget.
///
/// A name must be strictly shorter than this, so 63 bytes are usable.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum content size of a single file in bytes.
pub const MAX_FILE_SIZE: usize = 4096;

/// Admission limits of a file table.
///
/// Set once when the table is constructed and never renegotiated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLimits {
    /// Number of slots. Default: [`MAX_FILES`].
    pub capacity: usize,
    /// Name length bound including the terminator. Default: [`MAX_NAME_LEN`].
    pub max_name_len: usize,
    /// Largest accepted content length in bytes. Default: [`MAX_FILE_SIZE`].
    pub max_content_size: usize,
}

impl TableLimits {
    /// The reference sizing: 32 slots, 64-byte names, 4 KiB files.
    pub const fn reference() -> Self {
        Self {
            capacity: MAX_FILES,
            max_name_len: MAX_NAME_LEN,
            max_content_size: MAX_FILE_SIZE,
        }
    }

    /// Longest name, in bytes, that fits within `max_name_len`.
    pub fn usable_name_len(&self) -> usize {
        self.max_name_len.saturating_sub(1)
    }

    /// Whether a name of `len` bytes fits, terminator included.
    pub fn name_fits(&self, len: usize) -> bool {
        len < self.max_name_len
    }

    /// Whether content of `len` bytes is within the per-file limit.
    pub fn content_fits(&self, len: usize) -> bool {
        len <= self.max_content_size
    }
}

impl Default for TableLimits {
    fn default() -> Self {
        Self::reference()
    }
}
