//! Storage error types.

use arx_types::ErrorCode;
use thiserror::Error;

/// Errors raised by a [`FileStore`](crate::FileStore) backend.
///
/// Higher layers rely on [`NotFound`](Self::NotFound) being
/// distinguishable: the write command converts it into undo state, and
/// undo treats it as "absence already achieved" when deleting.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No file exists at the given path.
    #[error("file not found: '{path}'")]
    NotFound {
        /// The path that was requested.
        path: String,
    },

    /// Backend-specific failure (lock poisoned, I/O, remote error, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a [`NotFound`](Self::NotFound) error.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Returns `true` if this is [`NotFound`](Self::NotFound).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl ErrorCode for StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "STORE_NOT_FOUND",
            Self::Backend(_) => "STORE_BACKEND",
        }
    }

    /// A missing file is recoverable — the caller can create it and
    /// retry. Backend failures are opaque and require intervention.
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
