//! Storage configuration, validation, and error types.
//!
//! [`StorageConfig`] is the builder input for [`FileTable`](crate::FileTable).
//! [`validate()`](StorageConfig::validate) checks structural invariants
//! once at construction; the resulting limits are immutable afterwards.

use std::error::Error;
use std::fmt;

use ramfs_arena::{ArenaConfig, ArenaError};
use ramfs_core::TableLimits;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`StorageConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The table has no slots.
    ZeroCapacity,
    /// The name budget leaves no room for a one-byte name and its
    /// terminator.
    NameBudgetTooSmall {
        /// The configured `max_name_len`.
        configured: usize,
    },
    /// The per-file content limit is zero.
    ZeroContentSize,
    /// The heap bounds are invalid.
    Arena(ArenaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "table capacity must be at least 1"),
            Self::NameBudgetTooSmall { configured } => {
                write!(f, "max_name_len {configured} is below minimum of 2")
            }
            Self::ZeroContentSize => write!(f, "max_content_size must be at least 1"),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── StorageConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing a [`FileTable`](crate::FileTable).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Slot count and per-file admission limits.
    pub limits: TableLimits,
    /// Heap bounds supplied by the host.
    pub arena: ArenaConfig,
}

impl StorageConfig {
    /// Reference limits over the given heap bounds.
    pub fn new(arena: ArenaConfig) -> Self {
        Self {
            limits: TableLimits::default(),
            arena,
        }
    }

    /// Reference limits over a heap of `size` bytes.
    pub fn with_heap_size(size: usize) -> Self {
        Self::new(ArenaConfig::with_size(size))
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.limits.max_name_len < 2 {
            return Err(ConfigError::NameBudgetTooSmall {
                configured: self.limits.max_name_len,
            });
        }
        if self.limits.max_content_size == 0 {
            return Err(ConfigError::ZeroContentSize);
        }
        self.arena.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StorageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.limits, TableLimits::reference());
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut config = StorageConfig::default();
        config.limits.capacity = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn one_byte_name_budget_rejected() {
        let mut config = StorageConfig::default();
        config.limits.max_name_len = 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NameBudgetTooSmall { configured: 1 })
        );
    }

    #[test]
    fn zero_content_size_rejected() {
        let mut config = StorageConfig::default();
        config.limits.max_content_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroContentSize));
    }

    #[test]
    fn inverted_heap_rejected() {
        let config = StorageConfig::new(ArenaConfig::new(0x2000, 0x1000));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Arena(ArenaError::InvalidBounds { .. })));
        assert!(err.source().is_some());
    }

    #[test]
    fn with_heap_size_keeps_reference_limits() {
        let config = StorageConfig::with_heap_size(4096);
        assert_eq!(config.arena.size(), 4096);
        assert_eq!(config.limits.capacity, 32);
    }
}
