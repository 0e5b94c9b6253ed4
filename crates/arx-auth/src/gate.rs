//! The access gate.

use crate::{AccessError, AccessLevel, AuditEntry, Operation};
use arx_store::FileStore;
use chrono::Utc;
use std::io;
use std::sync::{Arc, RwLock};

/// Level-checked, audited view over a [`FileStore`].
///
/// One gate belongs to one caller: the caller's [`AccessLevel`] is fixed
/// at construction and compared against each operation's required level.
/// Several gates — one per user — may share a single backend:
///
/// ```text
/// user A (Read)  ──► FileGate ──┐
/// user B (Write) ──► FileGate ──┼──► Arc<dyn FileStore>
/// user C (Admin) ──► FileGate ──┘
/// ```
///
/// # Audit Trail
///
/// Every call — authorized or not — grows the gate's audit log by
/// exactly one [`AuditEntry`]. The log is append-only and owned by the
/// gate; [`access_log`](Self::access_log) hands out snapshots.
///
/// # Bypass Handle
///
/// [`store`](Self::store) exposes the raw backend. Command undo uses it
/// to reverse effects without re-authorization: reversal restores a
/// state the caller already produced through authorized calls.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, FileGate};
/// use arx_store::MemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// let gate = FileGate::new(store, AccessLevel::Write);
///
/// gate.write_file("notes.txt", "draft")?;
/// assert_eq!(gate.read_file("notes.txt")?, "draft");
///
/// // WRITE < ADMIN: denied, but still audited.
/// assert!(gate.delete_file("notes.txt").is_err());
/// assert_eq!(gate.access_log().len(), 3);
/// # Ok::<(), arx_auth::AccessError>(())
/// ```
#[derive(Debug)]
pub struct FileGate {
    store: Arc<dyn FileStore>,
    caller: AccessLevel,
    audit: RwLock<Vec<AuditEntry>>,
}

impl FileGate {
    /// Creates a gate for a caller at the given level.
    #[must_use]
    pub fn new(store: Arc<dyn FileStore>, caller: AccessLevel) -> Self {
        Self {
            store,
            caller,
            audit: RwLock::new(Vec::new()),
        }
    }

    /// Returns the caller's assigned level.
    #[must_use]
    pub fn caller_level(&self) -> AccessLevel {
        self.caller
    }

    /// Returns the raw backend handle.
    ///
    /// Calls through this handle are **not** checked and **not**
    /// audited. The only in-tree consumer is command undo; see the
    /// type-level docs for the rationale.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn FileStore> {
        &self.store
    }

    /// Checks whether the caller may perform `operation` on `path`.
    ///
    /// Appends one audit entry regardless of outcome and emits a
    /// structured `tracing` event. Performs no storage call — on
    /// `Ok(true)` the caller is expected to follow up with the actual
    /// operation.
    ///
    /// # Errors
    ///
    /// [`AccessError::Denied`] when the caller's level is insufficient;
    /// the message names the operation, path, required level and caller
    /// level.
    pub fn check_access(
        &self,
        required: AccessLevel,
        operation: Operation,
        path: &str,
    ) -> Result<bool, AccessError> {
        let allowed = self.caller.satisfies(required);

        let entry = AuditEntry {
            timestamp: Utc::now(),
            operation,
            path: path.to_string(),
            caller: self.caller,
            required,
            allowed,
        };
        match self.audit.write() {
            Ok(mut log) => log.push(entry),
            Err(e) => {
                tracing::error!("file_gate: audit lock poisoned on check_access: {e}");
            }
        }

        if allowed {
            tracing::debug!(
                operation = %operation,
                path,
                caller = %self.caller,
                required = %required,
                "access allowed"
            );
            Ok(true)
        } else {
            tracing::warn!(
                operation = %operation,
                path,
                caller = %self.caller,
                required = %required,
                "access denied"
            );
            Err(AccessError::Denied {
                operation,
                path: path.to_string(),
                required,
                caller: self.caller,
            })
        }
    }

    /// Reads a file after a `READ`-level check.
    ///
    /// # Errors
    ///
    /// [`AccessError::Denied`] below `Read` level;
    /// [`StoreError::NotFound`](arx_store::StoreError::NotFound) (wrapped) for missing paths — distinct
    /// from a denial and recorded against an `allowed=true` entry.
    pub fn read_file(&self, path: &str) -> Result<String, AccessError> {
        self.check_access(Operation::Read.required_level(), Operation::Read, path)?;
        Ok(self.store.read(path)?)
    }

    /// Writes a file after a `WRITE`-level check.
    ///
    /// # Errors
    ///
    /// [`AccessError::Denied`] below `Write` level; backend failures
    /// propagate unchanged.
    pub fn write_file(&self, path: &str, content: &str) -> Result<(), AccessError> {
        self.check_access(Operation::Write.required_level(), Operation::Write, path)?;
        Ok(self.store.write(path, content)?)
    }

    /// Deletes a file after an `ADMIN`-level check.
    ///
    /// # Errors
    ///
    /// [`AccessError::Denied`] below `Admin` level;
    /// [`StoreError::NotFound`](arx_store::StoreError::NotFound) (wrapped) for missing paths.
    pub fn delete_file(&self, path: &str) -> Result<(), AccessError> {
        self.check_access(Operation::Delete.required_level(), Operation::Delete, path)?;
        Ok(self.store.delete(path)?)
    }

    /// Lists all stored paths after a `READ`-level check.
    ///
    /// The audit entry records the [`Operation::LIST_PATH`] sentinel,
    /// since listing targets the whole store.
    ///
    /// # Errors
    ///
    /// [`AccessError::Denied`] below `Read` level.
    pub fn list_files(&self) -> Result<Vec<String>, AccessError> {
        self.check_access(
            Operation::List.required_level(),
            Operation::List,
            Operation::LIST_PATH,
        )?;
        Ok(self.store.list()?)
    }

    /// Returns a snapshot of the audit log.
    ///
    /// The copy does not reflect checks performed after it was taken,
    /// and callers cannot mutate gate-owned history through it.
    #[must_use]
    pub fn access_log(&self) -> Vec<AuditEntry> {
        match self.audit.read() {
            Ok(log) => log.clone(),
            Err(e) => {
                tracing::error!("file_gate: audit lock poisoned on access_log: {e}");
                Vec::new()
            }
        }
    }

    /// Renders the audit log into `out`, one entry per line.
    ///
    /// Pure presentation over [`access_log`](Self::access_log); the sink
    /// is injected so the gate never talks to the console directly.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn write_access_log(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Access log:")?;
        let log = self.access_log();
        if log.is_empty() {
            writeln!(out, "  (empty)")?;
            return Ok(());
        }
        for entry in log {
            writeln!(out, "  {entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arx_store::MemoryStore;

    fn gate_with(level: AccessLevel) -> FileGate {
        FileGate::new(Arc::new(MemoryStore::new()), level)
    }

    fn seeded_gate(level: AccessLevel) -> FileGate {
        let store = Arc::new(MemoryStore::new());
        store.write("config.txt", "DATABASE_URL=localhost:5432").expect("seed");
        FileGate::new(store, level)
    }

    // ─── check_access ───────────────────────────────────────────────

    #[test]
    fn check_access_full_grid() {
        for caller in AccessLevel::ALL {
            for op in Operation::ALL {
                let gate = gate_with(caller);
                let required = op.required_level();
                let result = gate.check_access(required, op, "p.txt");

                if caller >= required {
                    assert!(result.expect("allowed"), "{caller} should satisfy {op}");
                } else {
                    let err = result.unwrap_err();
                    assert!(err.is_denied(), "{caller} should be denied {op}");
                }

                let log = gate.access_log();
                assert_eq!(log.len(), 1);
                assert_eq!(log[0].allowed, caller >= required);
                assert_eq!(log[0].operation, op);
                assert_eq!(log[0].caller, caller);
                assert_eq!(log[0].required, required);
            }
        }
    }

    #[test]
    fn every_call_appends_one_entry() {
        let gate = seeded_gate(AccessLevel::Write);

        let _ = gate.list_files();
        let _ = gate.read_file("config.txt");
        let _ = gate.write_file("new.txt", "x");
        let _ = gate.delete_file("config.txt"); // denied
        let _ = gate.read_file("missing.txt"); // allowed, then NotFound

        assert_eq!(gate.access_log().len(), 5);
    }

    #[test]
    fn snapshot_does_not_see_later_calls() {
        let gate = seeded_gate(AccessLevel::Read);
        let _ = gate.read_file("config.txt");

        let snapshot = gate.access_log();
        assert_eq!(snapshot.len(), 1);

        let _ = gate.list_files();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(gate.access_log().len(), 2);
    }

    // ─── Gate operations ────────────────────────────────────────────

    #[test]
    fn read_missing_file_is_store_error_not_denial() {
        // Scenario A: empty backend, READ caller. Authorization passes,
        // storage fails, audit records one allowed READ entry.
        let gate = gate_with(AccessLevel::Read);

        let err = gate.read_file("x").unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_denied());

        let log = gate.access_log();
        assert_eq!(log.len(), 1);
        assert!(log[0].is_allowed());
        assert_eq!(log[0].operation, Operation::Read);
    }

    #[test]
    fn write_user_cannot_delete() {
        // Scenario B: WRITE caller, delete denied, backend unchanged.
        let gate = seeded_gate(AccessLevel::Write);

        let err = gate.delete_file("config.txt").unwrap_err();
        assert!(err.is_denied());

        let log = gate.access_log();
        assert_eq!(log.len(), 1);
        assert!(log[0].is_denied());
        assert_eq!(log[0].operation, Operation::Delete);

        // Still present: the gate never touched the store.
        assert_eq!(
            gate.store().read("config.txt").expect("still there"),
            "DATABASE_URL=localhost:5432"
        );
    }

    #[test]
    fn admin_can_do_everything() {
        let gate = seeded_gate(AccessLevel::Admin);

        assert_eq!(
            gate.read_file("config.txt").expect("read"),
            "DATABASE_URL=localhost:5432"
        );
        gate.write_file("users.db", "[]").expect("write");
        gate.delete_file("users.db").expect("delete");
        assert_eq!(gate.list_files().expect("list"), vec!["config.txt".to_string()]);
    }

    #[test]
    fn none_level_is_denied_everything() {
        let gate = seeded_gate(AccessLevel::None);

        assert!(gate.read_file("config.txt").unwrap_err().is_denied());
        assert!(gate.write_file("a", "b").unwrap_err().is_denied());
        assert!(gate.delete_file("config.txt").unwrap_err().is_denied());
        assert!(gate.list_files().unwrap_err().is_denied());
        assert_eq!(gate.access_log().len(), 4);
        assert!(gate.access_log().iter().all(AuditEntry::is_denied));
    }

    #[test]
    fn list_audits_sentinel_path() {
        let gate = gate_with(AccessLevel::Read);
        gate.list_files().expect("list");

        let log = gate.access_log();
        assert_eq!(log[0].path, Operation::LIST_PATH);
    }

    #[test]
    fn denied_message_contents() {
        let gate = gate_with(AccessLevel::Read);
        let msg = gate.write_file("config.txt", "x").unwrap_err().to_string();

        assert!(msg.contains("WRITE"), "got: {msg}");
        assert!(msg.contains("config.txt"), "got: {msg}");
        // Required and caller levels both named.
        assert!(msg.contains("requires WRITE"), "got: {msg}");
        assert!(msg.contains("caller has READ"), "got: {msg}");
    }

    #[test]
    fn independent_gates_share_one_store() {
        let store = Arc::new(MemoryStore::new());
        let writer = FileGate::new(store.clone(), AccessLevel::Write);
        let reader = FileGate::new(store, AccessLevel::Read);

        writer.write_file("shared.txt", "hello").expect("write");
        assert_eq!(reader.read_file("shared.txt").expect("read"), "hello");

        // Each gate audits only its own calls.
        assert_eq!(writer.access_log().len(), 1);
        assert_eq!(reader.access_log().len(), 1);
    }

    #[test]
    fn custom_required_level_overrides_mapping() {
        // check_access takes the requirement explicitly, so a caller can
        // demand a stricter level than the default mapping.
        let gate = gate_with(AccessLevel::Write);
        let err = gate
            .check_access(AccessLevel::Admin, Operation::Write, "vault.txt")
            .unwrap_err();
        assert!(err.is_denied());
    }

    // ─── Audit rendering ────────────────────────────────────────────

    #[test]
    fn write_access_log_renders_entries() {
        let gate = seeded_gate(AccessLevel::Write);
        let _ = gate.read_file("config.txt");
        let _ = gate.delete_file("config.txt");

        let mut out = Vec::new();
        gate.write_access_log(&mut out).expect("render");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("Access log:"), "got: {text}");
        assert!(text.contains("ALLOW"), "got: {text}");
        assert!(text.contains("DENY"), "got: {text}");
        assert!(text.contains("config.txt"), "got: {text}");
    }

    #[test]
    fn write_access_log_empty() {
        let gate = gate_with(AccessLevel::Read);
        let mut out = Vec::new();
        gate.write_access_log(&mut out).expect("render");
        assert!(String::from_utf8(out).expect("utf8").contains("(empty)"));
    }
}
