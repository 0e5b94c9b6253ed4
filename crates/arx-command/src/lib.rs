//! Reversible storage commands for the ARX file vault.
//!
//! Every mutation of the store can be expressed as a [`Command`]: a
//! reified request that executes through a [`FileGate`](arx_auth::FileGate)
//! (authorized, audited) and captures whatever prior state it needs to
//! reverse itself. [`CommandHistory`] sequences executed commands and
//! drives linear, last-in-first-out undo.
//!
//! # Control Flow
//!
//! ```text
//! caller ──► CommandHistory::execute
//!                 │
//!                 ▼
//!          Command::execute ──► FileGate (check + audit) ──► FileStore
//!                 │
//!                 └─ captures undo state (direct store read)
//!
//! caller ──► CommandHistory::undo
//!                 │
//!                 ▼
//!          Command::undo ──► FileGate::store() ──► FileStore
//!                            (no re-authorization — policy decision,
//!                             see FileGate docs)
//! ```
//!
//! # The Four Commands
//!
//! | Command | Effect | Reversal |
//! |---------|--------|----------|
//! | [`ReadFile`] | caches content | clears the cache |
//! | [`WriteFile`] | creates or overwrites | deletes, or restores prior content |
//! | [`DeleteFile`] | removes (content captured first) | writes content back |
//! | [`ListFiles`] | caches the path set | discards the snapshot |
//!
//! The set is closed: these four cover every operation the gate
//! exposes, and no open extension point is needed.

mod command;
mod delete;
mod history;
mod list;
mod read;
mod write;

pub use command::{Command, CommandOutput};
pub use delete::DeleteFile;
pub use history::CommandHistory;
pub use list::ListFiles;
pub use read::ReadFile;
pub use write::WriteFile;
