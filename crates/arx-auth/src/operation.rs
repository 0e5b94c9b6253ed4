//! Storage operation kinds.

use crate::AccessLevel;
use serde::{Deserialize, Serialize};

/// The semantic action being authorized.
///
/// Each operation maps to exactly one required [`AccessLevel`]; the
/// mapping is fixed and global (no per-path overrides):
///
/// | Operation | Required level |
/// |-----------|----------------|
/// | `Read`    | `Read` |
/// | `Write`   | `Write` |
/// | `Delete`  | `Admin` |
/// | `List`    | `Read` |
///
/// Deletion is deliberately gated at `Admin` rather than `Write`:
/// overwrites are reversible through command undo state, full removal
/// of a path is the most destructive primitive the store offers.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, Operation};
///
/// assert_eq!(Operation::Delete.required_level(), AccessLevel::Admin);
/// assert_eq!(Operation::List.to_string(), "LIST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Read a file's content.
    Read,
    /// Create or overwrite a file.
    Write,
    /// Remove a file.
    Delete,
    /// Enumerate stored paths.
    List,
}

impl Operation {
    /// All operations.
    pub const ALL: [Self; 4] = [Self::Read, Self::Write, Self::Delete, Self::List];

    /// Sentinel path recorded in audit entries for [`List`](Self::List),
    /// which targets the whole store rather than one path.
    pub const LIST_PATH: &'static str = "*";

    /// Returns the access level required to perform this operation.
    #[must_use]
    pub fn required_level(self) -> AccessLevel {
        match self {
            Self::Read => AccessLevel::Read,
            Self::Write => AccessLevel::Write,
            Self::Delete => AccessLevel::Admin,
            Self::List => AccessLevel::Read,
        }
    }

    /// Returns the operation's canonical upper-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Delete => "DELETE",
            Self::List => "LIST",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
