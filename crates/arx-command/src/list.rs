//! List command.

use crate::{Command, CommandOutput};
use arx_auth::{AccessError, FileGate};
use std::sync::Arc;

/// Lists stored paths through the gate and caches the snapshot.
///
/// Listing has no external side effect; undo discards the cached
/// snapshot. The audit entry records the `"*"` sentinel path since the
/// whole store is the target.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, FileGate};
/// use arx_command::{Command, ListFiles};
/// use arx_store::{FileStore, MemoryStore};
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// store.write("a.txt", "1")?;
/// store.write("b.txt", "2")?;
/// let gate = Arc::new(FileGate::new(store, AccessLevel::Read));
///
/// let mut cmd = ListFiles::new(gate);
/// let output = cmd.execute()?;
/// assert_eq!(output.listing(), Some(&["a.txt".to_string(), "b.txt".to_string()][..]));
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
#[derive(Debug)]
pub struct ListFiles {
    gate: Arc<FileGate>,
    listing: Vec<String>,
}

impl ListFiles {
    /// Creates a list command.
    #[must_use]
    pub fn new(gate: Arc<FileGate>) -> Self {
        Self {
            gate,
            listing: Vec::new(),
        }
    }

    /// Returns the cached snapshot from the last execute.
    #[must_use]
    pub fn listing(&self) -> &[String] {
        &self.listing
    }
}

impl Command for ListFiles {
    fn execute(&mut self) -> Result<CommandOutput, AccessError> {
        let listing = self.gate.list_files()?;
        self.listing = listing.clone();
        Ok(CommandOutput::Listing(listing))
    }

    fn undo(&mut self) -> Result<(), AccessError> {
        self.listing.clear();
        Ok(())
    }

    fn describe(&self) -> String {
        "List files".to_string()
    }
}
