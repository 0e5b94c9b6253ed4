//! Read command.

use crate::{Command, CommandOutput};
use arx_auth::{AccessError, FileGate};
use std::sync::Arc;

/// Reads a file through the gate and caches the content.
///
/// Reading has no storage side effect, so there is nothing to reverse:
/// undo simply clears the cached result. The cache exists for
/// inspection via [`result`](Self::result), not for rollback.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, FileGate};
/// use arx_command::{Command, ReadFile};
/// use arx_store::{FileStore, MemoryStore};
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// store.write("config.txt", "key=value")?;
/// let gate = Arc::new(FileGate::new(store, AccessLevel::Read));
///
/// let mut cmd = ReadFile::new(gate, "config.txt");
/// let output = cmd.execute()?;
/// assert_eq!(output.content(), Some("key=value"));
/// assert_eq!(cmd.result(), Some("key=value"));
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
#[derive(Debug)]
pub struct ReadFile {
    gate: Arc<FileGate>,
    path: String,
    result: Option<String>,
}

impl ReadFile {
    /// Creates a read command for `path`.
    #[must_use]
    pub fn new(gate: Arc<FileGate>, path: impl Into<String>) -> Self {
        Self {
            gate,
            path: path.into(),
            result: None,
        }
    }

    /// Returns the cached content from the last execute, if any.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

impl Command for ReadFile {
    fn execute(&mut self) -> Result<CommandOutput, AccessError> {
        let content = self.gate.read_file(&self.path)?;
        self.result = Some(content.clone());
        Ok(CommandOutput::Content(content))
    }

    fn undo(&mut self) -> Result<(), AccessError> {
        self.result = None;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Read file: {}", self.path)
    }
}
