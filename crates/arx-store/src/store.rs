//! Storage backend abstraction.
//!
//! The [`FileStore`] trait is the only storage surface the rest of ARX
//! sees. The access gate forwards authorized calls to it, and command
//! undo reaches it directly (reversal is deliberately not re-authorized).

use crate::StoreError;

/// A path-to-content mapping.
///
/// Implementations must be thread-safe (`Send + Sync`): one store is
/// typically shared by several access gates, each owned by a different
/// caller. Mutating operations take `&self`; implementations provide
/// their own interior mutability and must serialize concurrent writes.
///
/// # Example
///
/// ```
/// use arx_store::{FileStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.write("notes.txt", "hello")?;
/// assert_eq!(store.read("notes.txt")?, "hello");
/// assert_eq!(store.list()?, vec!["notes.txt".to_string()]);
/// store.delete("notes.txt")?;
/// assert!(store.read("notes.txt").is_err());
/// # Ok::<(), arx_store::StoreError>(())
/// ```
pub trait FileStore: Send + Sync + std::fmt::Debug {
    /// Returns the content at `path`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no file exists at `path`.
    fn read(&self, path: &str) -> Result<String, StoreError>;

    /// Stores `content` at `path`, creating or overwriting.
    ///
    /// # Errors
    ///
    /// Backend-specific failures only; writing never requires the path
    /// to exist.
    fn write(&self, path: &str, content: &str) -> Result<(), StoreError>;

    /// Removes the file at `path`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no file exists at `path`.
    fn delete(&self, path: &str) -> Result<(), StoreError>;

    /// Returns all stored paths, sorted.
    ///
    /// Sorting keeps listings deterministic across backends whose
    /// internal iteration order is unspecified.
    fn list(&self) -> Result<Vec<String>, StoreError>;
}
