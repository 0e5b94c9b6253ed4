//! Linear command history.

use crate::{Command, CommandOutput};
use arx_auth::AccessError;
use std::io;

/// LIFO sequence of successfully executed commands.
///
/// The history owns each command from the moment its execute succeeds
/// until it is popped for undo, after which the command is discarded.
/// A failed execute is never recorded, so the log only ever contains
/// operations that actually happened.
///
/// # Undo Failure Semantics
///
/// Reversal is best-effort: [`undo`](Self::undo) surfaces failures
/// through its `Result` rather than swallowing them, and the failed
/// command is not pushed back (its undo state is already consumed).
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, FileGate};
/// use arx_command::{CommandHistory, WriteFile};
/// use arx_store::{FileStore, MemoryStore};
/// use std::sync::Arc;
///
/// let gate = Arc::new(FileGate::new(Arc::new(MemoryStore::new()), AccessLevel::Admin));
/// let mut history = CommandHistory::new();
///
/// history.execute(WriteFile::new(gate.clone(), "t.txt", "A"))?;
/// history.execute(WriteFile::new(gate.clone(), "t.txt", "B"))?;
/// assert_eq!(history.len(), 2);
///
/// history.undo()?; // back to "A"
/// assert_eq!(gate.store().read("t.txt")?, "A");
///
/// let reversed = history.undo_all()?;
/// assert_eq!(reversed, 1);
/// assert!(history.is_empty());
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
#[derive(Debug, Default)]
pub struct CommandHistory {
    history: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `command` to completion and records it.
    ///
    /// # Errors
    ///
    /// Propagates the command's failure; a failed command is not
    /// recorded.
    pub fn execute(
        &mut self,
        command: impl Command + 'static,
    ) -> Result<CommandOutput, AccessError> {
        let mut command = Box::new(command);
        let output = command.execute()?;
        self.history.push(command);
        Ok(output)
    }

    /// Undoes the most recent command.
    ///
    /// Returns the undone command's description, or `Ok(None)` if the
    /// history is empty (an empty history is a valid state, not an
    /// error).
    ///
    /// # Errors
    ///
    /// Propagates reversal failures; the command stays popped.
    pub fn undo(&mut self) -> Result<Option<String>, AccessError> {
        let Some(mut command) = self.history.pop() else {
            return Ok(None);
        };
        let label = command.describe();
        command.undo()?;
        tracing::debug!(command = %label, "undone");
        Ok(Some(label))
    }

    /// Undoes every recorded command, most recent first.
    ///
    /// Returns how many commands were reversed. Terminates with an
    /// empty history; since undo bypasses authorization, no denial can
    /// interrupt the sweep.
    ///
    /// # Errors
    ///
    /// Stops at the first reversal failure.
    pub fn undo_all(&mut self) -> Result<usize, AccessError> {
        let mut reversed = 0;
        while self.undo()?.is_some() {
            reversed += 1;
        }
        Ok(reversed)
    }

    /// Returns the recorded descriptions, in execution order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.history.iter().map(|c| c.describe()).collect()
    }

    /// Returns the number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Renders the history into `out`, one numbered line per command.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn write_history(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Command history:")?;
        if self.history.is_empty() {
            writeln!(out, "  (empty)")?;
            return Ok(());
        }
        for (index, command) in self.history.iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, command.describe())?;
        }
        Ok(())
    }
}
