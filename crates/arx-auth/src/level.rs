//! Access level types.

use serde::{Deserialize, Serialize};

/// The privilege rank assigned to a caller.
///
/// Levels form a total order; an operation is allowed when the caller's
/// level is at least the operation's required level. Identity is out of
/// scope — a level is pre-supplied at gate construction, not verified.
///
/// # Ordering
///
/// ```text
/// None (0) < Read (1) < Write (2) < Admin (3)
/// ```
///
/// Each level implies everything below it: a `Write` caller can read,
/// an `Admin` caller can do anything.
///
/// # Example
///
/// ```
/// use arx_auth::AccessLevel;
///
/// assert!(AccessLevel::Admin >= AccessLevel::Write);
/// assert!(AccessLevel::Read < AccessLevel::Write);
/// assert_eq!(AccessLevel::Write.rank(), 2);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum AccessLevel {
    /// No access at all. Every operation is denied.
    #[default]
    None = 0,
    /// Read-only: may read and list files.
    Read = 1,
    /// Read-write: may additionally create and overwrite files.
    Write = 2,
    /// Full access, including deletion.
    Admin = 3,
}

impl AccessLevel {
    /// All levels, in ascending order.
    pub const ALL: [Self; 4] = [Self::None, Self::Read, Self::Write, Self::Admin];

    /// Returns the integer rank used for comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use arx_auth::AccessLevel;
    ///
    /// assert_eq!(AccessLevel::None.rank(), 0);
    /// assert_eq!(AccessLevel::Admin.rank(), 3);
    /// ```
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this level satisfies `required`.
    ///
    /// # Example
    ///
    /// ```
    /// use arx_auth::AccessLevel;
    ///
    /// assert!(AccessLevel::Write.satisfies(AccessLevel::Read));
    /// assert!(!AccessLevel::Write.satisfies(AccessLevel::Admin));
    /// ```
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self >= required
    }

    /// Parses a level name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use arx_auth::AccessLevel;
    ///
    /// assert_eq!(AccessLevel::parse("admin"), Some(AccessLevel::Admin));
    /// assert_eq!(AccessLevel::parse("READ"), Some(AccessLevel::Read));
    /// assert_eq!(AccessLevel::parse("root"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "READ" => Some(Self::Read),
            "WRITE" => Some(Self::Write),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns the level's canonical upper-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
