//! Write command.

use crate::{Command, CommandOutput};
use arx_auth::{AccessError, FileGate};
use arx_store::{FileStore, StoreError};
use std::sync::Arc;

/// What the write replaced, captured at execute time.
#[derive(Debug)]
enum Rollback {
    /// The path did not exist before; reversal deletes it.
    Created,
    /// The path held this content before; reversal writes it back.
    Replaced(String),
}

/// Creates or overwrites a file through the gate, reversibly.
///
/// Execute first captures the prior state with a direct store read —
/// a missing path is the expected "does not exist yet" signal, converted
/// into undo state rather than surfaced — then performs the authorized
/// write. Undo consumes the captured state:
///
/// - `Created` → delete the path; a [`NotFound`](StoreError::NotFound)
///   here is benign (absence is the desired end state) and only traced.
/// - `Replaced(prior)` → write the prior content back.
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
/// let mut first = WriteFile::new(gate.clone(), "t.txt", "v1");
/// first.execute()?;
/// let mut second = WriteFile::new(gate.clone(), "t.txt", "v2");
/// second.execute()?;
///
/// second.undo()?; // back to v1
/// assert_eq!(gate.store().read("t.txt")?, "v1");
/// first.undo()?;  // t.txt never pre-existed: gone entirely
/// assert!(gate.store().read("t.txt").is_err());
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
#[derive(Debug)]
pub struct WriteFile {
    gate: Arc<FileGate>,
    path: String,
    content: String,
    rollback: Option<Rollback>,
}

impl WriteFile {
    /// Creates a write command storing `content` at `path`.
    #[must_use]
    pub fn new(gate: Arc<FileGate>, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            gate,
            path: path.into(),
            content: content.into(),
            rollback: None,
        }
    }
}

impl Command for WriteFile {
    fn execute(&mut self) -> Result<CommandOutput, AccessError> {
        let rollback = match self.gate.store().read(&self.path) {
            Ok(prior) => Rollback::Replaced(prior),
            Err(StoreError::NotFound { .. }) => Rollback::Created,
            Err(e) => return Err(e.into()),
        };

        self.gate.write_file(&self.path, &self.content)?;
        self.rollback = Some(rollback);
        Ok(CommandOutput::None)
    }

    fn undo(&mut self) -> Result<(), AccessError> {
        match self.rollback.take() {
            Some(Rollback::Created) => match self.gate.store().delete(&self.path) {
                Ok(()) | Err(StoreError::NotFound { .. }) => {
                    // Absence is the desired end state either way.
                    tracing::debug!(path = %self.path, "write undo: path removed or already absent");
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            Some(Rollback::Replaced(prior)) => {
                Ok(self.gate.store().write(&self.path, &prior)?)
            }
            None => {
                tracing::debug!(path = %self.path, "write undo without prior execute: no-op");
                Ok(())
            }
        }
    }

    fn describe(&self) -> String {
        format!("Write file: {}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arx_auth::AccessLevel;
    use arx_store::{FileStore, MemoryStore};

    fn gate(level: AccessLevel) -> Arc<FileGate> {
        Arc::new(FileGate::new(Arc::new(MemoryStore::new()), level))
    }

    #[test]
    fn execute_creates_file() {
        let g = gate(AccessLevel::Write);
        let mut cmd = WriteFile::new(g.clone(), "a.txt", "alpha");

        assert_eq!(cmd.execute().expect("execute"), CommandOutput::None);
        assert_eq!(g.store().read("a.txt").expect("read"), "alpha");
    }

    #[test]
    fn undo_of_creation_deletes() {
        let g = gate(AccessLevel::Write);
        let mut cmd = WriteFile::new(g.clone(), "a.txt", "alpha");
        cmd.execute().expect("execute");

        cmd.undo().expect("undo");
        assert!(g.store().read("a.txt").unwrap_err().is_not_found());
    }

    #[test]
    fn undo_of_overwrite_restores_prior_content() {
        let g = gate(AccessLevel::Write);
        g.store().write("a.txt", "original").expect("seed");

        let mut cmd = WriteFile::new(g.clone(), "a.txt", "changed");
        cmd.execute().expect("execute");
        assert_eq!(g.store().read("a.txt").expect("read"), "changed");

        cmd.undo().expect("undo");
        assert_eq!(g.store().read("a.txt").expect("read"), "original");
    }

    #[test]
    fn undo_delete_already_gone_is_benign() {
        let g = gate(AccessLevel::Write);
        let mut cmd = WriteFile::new(g.clone(), "a.txt", "alpha");
        cmd.execute().expect("execute");

        // Someone else removed the path in the meantime.
        g.store().delete("a.txt").expect("external delete");

        cmd.undo().expect("undo is idempotent about absence");
        assert!(g.store().read("a.txt").unwrap_err().is_not_found());
    }

    #[test]
    fn denied_write_leaves_no_undo_state() {
        let g = gate(AccessLevel::Read);
        let mut cmd = WriteFile::new(g.clone(), "a.txt", "alpha");

        assert!(cmd.execute().unwrap_err().is_denied());
        // Undo after a failed execute must not delete anything.
        g.store().write("a.txt", "someone else's").expect("seed");
        cmd.undo().expect("no-op");
        assert_eq!(g.store().read("a.txt").expect("read"), "someone else's");
    }

    #[test]
    fn undo_state_consumed_once() {
        let g = gate(AccessLevel::Write);
        let mut cmd = WriteFile::new(g.clone(), "a.txt", "alpha");
        cmd.execute().expect("execute");
        cmd.undo().expect("undo");

        // Second undo: state already consumed, nothing happens.
        g.store().write("a.txt", "new").expect("seed");
        cmd.undo().expect("no-op");
        assert_eq!(g.store().read("a.txt").expect("read"), "new");
    }

    #[test]
    fn describe_label() {
        let cmd = WriteFile::new(gate(AccessLevel::Write), "a.txt", "x");
        assert_eq!(cmd.describe(), "Write file: a.txt");
    }
}
