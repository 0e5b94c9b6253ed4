//! Audit trail entries.

use crate::{AccessLevel, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One authorization decision, recorded exactly once.
///
/// Entries are created by the gate for every check — allowed or denied —
/// and appended to an append-only log. They are never mutated or
/// removed; snapshots taken via
/// [`FileGate::access_log`](crate::FileGate::access_log) are copies.
///
/// # Example
///
/// ```
/// use arx_auth::{AccessLevel, AuditEntry, Operation};
/// use chrono::Utc;
///
/// let entry = AuditEntry {
///     timestamp: Utc::now(),
///     operation: Operation::Delete,
///     path: "secret.key".to_string(),
///     caller: AccessLevel::Write,
///     required: AccessLevel::Admin,
///     allowed: false,
/// };
/// assert!(entry.is_denied());
/// assert!(entry.to_string().starts_with("DENY"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Wall-clock time of the decision.
    pub timestamp: DateTime<Utc>,
    /// The operation that was checked.
    pub operation: Operation,
    /// The target path (`"*"` for list operations).
    pub path: String,
    /// The caller's assigned level at check time.
    pub caller: AccessLevel,
    /// The level the operation required.
    pub required: AccessLevel,
    /// Outcome of the comparison `caller >= required`.
    pub allowed: bool,
}

impl AuditEntry {
    /// Returns `true` if the operation was allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Returns `true` if the operation was denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}

impl std::fmt::Display for AuditEntry {
    /// One-line rendering: `ALLOW <ts> READ "config.txt" (READ/READ)`.
    ///
    /// The trailing pair is caller level / required level.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.allowed { "ALLOW" } else { "DENY" };
        write!(
            f,
            "{status} {} {} \"{}\" ({}/{})",
            self.timestamp.to_rfc3339(),
            self.operation,
            self.path,
            self.caller,
            self.required,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(allowed: bool) -> AuditEntry {
        AuditEntry {
            timestamp: Utc::now(),
            operation: Operation::Write,
            path: "notes.txt".to_string(),
            caller: AccessLevel::Read,
            required: AccessLevel::Write,
            allowed,
        }
    }

    #[test]
    fn predicates() {
        assert!(entry(true).is_allowed());
        assert!(entry(false).is_denied());
    }

    #[test]
    fn display_allowed() {
        let line = entry(true).to_string();
        assert!(line.starts_with("ALLOW"), "got: {line}");
        assert!(line.contains("WRITE"), "got: {line}");
        assert!(line.contains("notes.txt"), "got: {line}");
        assert!(line.contains("(READ/WRITE)"), "got: {line}");
    }

    #[test]
    fn display_denied() {
        let line = entry(false).to_string();
        assert!(line.starts_with("DENY"), "got: {line}");
    }

    #[test]
    fn serde_roundtrip() {
        let original = entry(false);
        let json = serde_json::to_string(&original).expect("serialize");
        let parsed: AuditEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, original);
    }
}
