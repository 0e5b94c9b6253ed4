//! Level-based access control for the ARX file vault.
//!
//! This crate is the sole arbiter of whether a storage operation
//! proceeds, and the sole writer of the audit trail.
//!
//! # Permission Model
//!
//! ```text
//! allowed = AccessLevel(WHO) >= Operation::required_level(WHAT)
//! ```
//!
//! | Type | Controls |
//! |------|----------|
//! | [`AccessLevel`] | Who is calling (ordered rank, assigned at gate construction) |
//! | [`Operation`] | What is being attempted (fixed mapping to a required level) |
//! | [`FileGate`] | The decision point: check, audit, then forward or deny |
//!
//! # Architecture
//!
//! ```text
//! FileStore trait (arx-store)          ← backend contract
//!          ↑
//! FileGate (THIS CRATE)                ← authorization + audit trail
//!          ↑
//! Command / CommandHistory (arx-command)
//! ```
//!
//! # Audit Trail
//!
//! Every check appends exactly one [`AuditEntry`] — allowed or denied —
//! to the gate's append-only log, and emits a structured `tracing`
//! event (`debug!` on allow, `warn!` on deny). [`FileGate::access_log`]
//! returns a snapshot copy; nothing is ever retracted.

mod audit;
mod error;
mod gate;
mod level;
mod operation;

pub use audit::AuditEntry;
pub use error::AccessError;
pub use gate::FileGate;
pub use level::AccessLevel;
pub use operation::Operation;
