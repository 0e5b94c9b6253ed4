//! The command contract.

use arx_auth::AccessError;

/// A reified, executable-and-reversible storage request.
///
/// Exactly four implementations exist — [`ReadFile`](crate::ReadFile),
/// [`WriteFile`](crate::WriteFile), [`DeleteFile`](crate::DeleteFile)
/// and [`ListFiles`](crate::ListFiles) — matching the gate's operation
/// set.
///
/// # Contract
///
/// - `execute` performs the operation through the command's gate
///   (authorized and audited) and records whatever is needed to reverse
///   it. A failed execute leaves no partial undo state behind.
/// - `undo` reverses the effect using only previously captured state,
///   acting on the backend directly — it never re-checks authorization.
///   Undo state is consumed by the call; undoing a command that never
///   executed is a traced no-op.
/// - `describe` returns a stable human-readable label.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, FileGate};
/// use arx_command::{Command, WriteFile};
/// use arx_store::{FileStore, MemoryStore};
/// use std::sync::Arc;
///
/// let gate = Arc::new(FileGate::new(Arc::new(MemoryStore::new()), AccessLevel::Write));
///
/// let mut cmd = WriteFile::new(gate.clone(), "t.txt", "hello");
/// assert_eq!(cmd.describe(), "Write file: t.txt");
///
/// cmd.execute()?;
/// assert_eq!(gate.store().read("t.txt")?, "hello");
///
/// cmd.undo()?;
/// assert!(gate.store().read("t.txt").is_err());
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
pub trait Command: Send + std::fmt::Debug {
    /// Performs the operation and captures undo state.
    ///
    /// # Errors
    ///
    /// [`AccessError::Denied`] when the gate refuses the operation;
    /// storage failures propagate unchanged.
    fn execute(&mut self) -> Result<CommandOutput, AccessError>;

    /// Reverses the operation using captured state only.
    ///
    /// # Errors
    ///
    /// Storage failures during reversal, except those documented as
    /// benign by the concrete command (e.g. deleting an already-absent
    /// path).
    fn undo(&mut self) -> Result<(), AccessError>;

    /// Returns a stable label, e.g. `Write file: config.txt`.
    fn describe(&self) -> String;
}

/// What a successful [`Command::execute`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// The operation has no value to return (write, delete).
    None,
    /// File content (read).
    Content(String),
    /// Stored paths (list).
    Listing(Vec<String>),
}

impl CommandOutput {
    /// Returns the content if this is [`Content`](Self::Content).
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Content(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the paths if this is [`Listing`](Self::Listing).
    #[must_use]
    pub fn listing(&self) -> Option<&[String]> {
        match self {
            Self::Listing(paths) => Some(paths),
            _ => None,
        }
    }
}
