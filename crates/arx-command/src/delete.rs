//! Delete command.

use crate::{Command, CommandOutput};
use arx_auth::{AccessError, FileGate};
use arx_store::FileStore;
use std::sync::Arc;

/// Deletes a file through the gate, capturing its content for reversal.
///
/// Execute reads the store directly to capture the current content; a
/// missing path fails the whole execute and nothing is deleted — delete
/// is only valid on an existing file. The authorized delete then runs
/// through the gate. Undo writes the captured content back, byte for
/// byte.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, FileGate};
/// use arx_command::{Command, DeleteFile};
/// use arx_store::{FileStore, MemoryStore};
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// store.write("secret.key", "sk-1234567890")?;
/// let gate = Arc::new(FileGate::new(store, AccessLevel::Admin));
///
/// let mut cmd = DeleteFile::new(gate.clone(), "secret.key");
/// cmd.execute()?;
/// assert!(gate.store().read("secret.key").is_err());
///
/// cmd.undo()?;
/// assert_eq!(gate.store().read("secret.key")?, "sk-1234567890");
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
#[derive(Debug)]
pub struct DeleteFile {
    gate: Arc<FileGate>,
    path: String,
    captured: Option<String>,
}

impl DeleteFile {
    /// Creates a delete command for `path`.
    #[must_use]
    pub fn new(gate: Arc<FileGate>, path: impl Into<String>) -> Self {
        Self {
            gate,
            path: path.into(),
            captured: None,
        }
    }
}

impl Command for DeleteFile {
    fn execute(&mut self) -> Result<CommandOutput, AccessError> {
        // Capture before destroying; a missing path aborts here and the
        // gate is never asked to delete.
        let content = self.gate.store().read(&self.path)?;
        self.gate.delete_file(&self.path)?;
        self.captured = Some(content);
        Ok(CommandOutput::None)
    }

    fn undo(&mut self) -> Result<(), AccessError> {
        match self.captured.take() {
            Some(content) => Ok(self.gate.store().write(&self.path, &content)?),
            None => {
                tracing::debug!(path = %self.path, "delete undo without prior execute: no-op");
                Ok(())
            }
        }
    }

    fn describe(&self) -> String {
        format!("Delete file: {}", self.path)
    }
}
