//! Access gate error types.
//!
//! Two failure kinds flow out of the gate:
//!
//! ```text
//! caller level < required level   →  AccessError::Denied   (audited, allowed=false)
//! backend failure (e.g. missing) →  AccessError::Store    (passes through unchanged)
//! ```
//!
//! The distinction matters to callers: a denial cannot be retried at the
//! same level, while a missing file can simply be created.

use crate::{AccessLevel, Operation};
use arx_store::StoreError;
use arx_types::ErrorCode;
use thiserror::Error;

/// Error raised by [`FileGate`](crate::FileGate) operations.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessError, AccessLevel, Operation};
///
/// let err = AccessError::Denied {
///     operation: Operation::Delete,
///     path: "secret.key".to_string(),
///     required: AccessLevel::Admin,
///     caller: AccessLevel::Write,
/// };
///
/// let msg = err.to_string();
/// assert!(msg.contains("DELETE"));
/// assert!(msg.contains("secret.key"));
/// assert!(msg.contains("ADMIN"));
/// assert!(msg.contains("WRITE"));
/// ```
#[derive(Debug, Error)]
pub enum AccessError {
    /// The caller's level does not satisfy the operation's requirement.
    ///
    /// Always paired with an audit entry whose `allowed` field is
    /// `false`. Never retried automatically.
    #[error("access denied: {operation} on \"{path}\" requires {required}, caller has {caller}")]
    Denied {
        /// The operation that was attempted.
        operation: Operation,
        /// The target path (`"*"` for list).
        path: String,
        /// The level the operation required.
        required: AccessLevel,
        /// The caller's assigned level.
        caller: AccessLevel,
    },

    /// A storage-level failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccessError {
    /// Returns `true` if this is an authorization denial.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }

    /// Returns `true` if this wraps a missing-file storage error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }
}

impl ErrorCode for AccessError {
    fn code(&self) -> &'static str {
        match self {
            Self::Denied { .. } => "AUTH_ACCESS_DENIED",
            Self::Store(e) => e.code(),
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Retrying at the same level cannot succeed.
            Self::Denied { .. } => false,
            Self::Store(e) => e.is_recoverable(),
        }
    }
}
