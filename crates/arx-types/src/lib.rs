//! Foundation types for ARX (Audited Reversible eXecution).
//!
//! # Crate Architecture
//!
//! ```text
//! arx-types    (ErrorCode)                ◄── THIS CRATE
//!     ↑
//! arx-store    (FileStore, StoreError)
//!     ↑
//! arx-auth     (AccessLevel, FileGate, AccessError)
//!     ↑
//! arx-command  (Command, CommandHistory)
//!     ↑
//! arx-cli      (demo driver)
//! ```
//!
//! Every error enum in the workspace implements [`ErrorCode`] so that
//! callers can branch on stable machine-readable codes instead of
//! display strings, and tests can enforce the code format with
//! [`assert_error_codes`].

/// Unified error code interface for ARX errors.
///
/// Implement this trait on every error enum to provide:
///
/// - **Machine-readable codes**: stable strings for programmatic handling
/// - **Recoverability info**: whether retrying or corrective action helps
///
/// # Code Format
///
/// Error codes must be:
///
/// - **UPPER_SNAKE_CASE**: e.g. `"STORE_NOT_FOUND"`
/// - **Prefixed per crate**: `"STORE_"` for arx-store, `"AUTH_"` for arx-auth
/// - **Stable**: a code is an API contract; changing it is a breaking change
///
/// # Recoverability
///
/// An error is recoverable when the caller can do something about it:
/// retry a transient condition, or correct state (e.g. create a missing
/// file and try again). Denied authorization is **not** recoverable —
/// retrying with the same privilege level cannot succeed.
///
/// # Example
///
/// ```
/// use arx_types::ErrorCode;
///
/// #[derive(Debug)]
/// enum VaultError {
///     Missing(String),
///     Sealed,
/// }
///
/// impl ErrorCode for VaultError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::Missing(_) => "VAULT_MISSING",
///             Self::Sealed => "VAULT_SEALED",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         matches!(self, Self::Missing(_))
///     }
/// }
///
/// let err = VaultError::Missing("a.txt".into());
/// assert_eq!(err.code(), "VAULT_MISSING");
/// assert!(err.is_recoverable());
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether retrying or corrective action may succeed.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows ARX conventions.
///
/// # Checks
///
/// 1. Code is non-empty
/// 2. Code starts with the expected crate prefix
/// 3. Code is UPPER_SNAKE_CASE
///
/// # Panics
///
/// Panics with a descriptive message if any check fails. Intended for
/// use in tests.
///
/// # Example
///
/// ```
/// use arx_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct Oops;
///
/// impl ErrorCode for Oops {
///     fn code(&self) -> &'static str { "DEMO_OOPS" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Oops, "DEMO_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Validates every variant of an error enum at once.
///
/// # Example
///
/// ```
/// use arx_types::{assert_error_codes, ErrorCode};
///
/// #[derive(Debug)]
/// enum E { A, B }
///
/// impl ErrorCode for E {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::A => "DEMO_A",
///             Self::B => "DEMO_B",
///         }
///     }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_codes(&[E::A, E::B], "DEMO_");
/// ```
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
