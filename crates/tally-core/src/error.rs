//! Shared error type across Tally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
///
/// Nothing here ever reaches an HTTP client: the counter route answers 200
/// unconditionally. These variants exist so the internal code stays honest
/// about failure points while the top level decides what to swallow.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Storage I/O failed (missing file, permissions, disk error).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
    /// Configuration was parseable but unusable.
    #[error("bad config: {0}")]
    BadConfig(String),
    /// Unsupported config schema version.
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Whether this error came from the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, TallyError::Storage(_))
    }
}
