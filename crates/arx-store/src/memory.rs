//! In-memory [`FileStore`] implementation.

use crate::{FileStore, StoreError};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe, process-local file store.
///
/// Backed by `RwLock<HashMap<String, String>>`. This is the reference
/// backend: everything lives in memory and vanishes with the process.
///
/// # Thread Safety
///
/// Reads take the read lock concurrently; writes serialize. Sharing one
/// `Arc<MemoryStore>` across several gates (one per user) is the
/// expected multi-user setup.
///
/// # Example
///
/// ```
/// use arx_store::{FileStore, MemoryStore};
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// store.write("config.txt", "DATABASE_URL=localhost:5432")?;
///
/// let view = Arc::clone(&store);
/// assert!(view.read("config.txt").is_ok());
/// # Ok::<(), arx_store::StoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.files.read() {
            Ok(files) => files.len(),
            Err(e) => {
                tracing::error!("memory_store: lock poisoned on len: {e}");
                0
            }
        }
    }

    /// Returns `true` if no files are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if a file exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        match self.files.read() {
            Ok(files) => files.contains_key(path),
            Err(e) => {
                tracing::error!("memory_store: lock poisoned on contains: {e}");
                false
            }
        }
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &str) -> Result<String, StoreError> {
        let files = self
            .files
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned on read: {e}")))?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::not_found(path))
    }

    fn write(&self, path: &str, content: &str) -> Result<(), StoreError> {
        let mut files = self
            .files
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned on write: {e}")))?;
        files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), StoreError> {
        let mut files = self
            .files
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned on delete: {e}")))?;
        files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(path))
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let files = self
            .files
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned on list: {e}")))?;
        let mut paths: Vec<String> = files.keys().cloned().collect();
        paths.sort();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list().expect("list"), Vec::<String>::new());
    }

    #[test]
    fn write_creates_and_overwrites() {
        let store = MemoryStore::new();
        store.write("a.txt", "one").expect("write");
        assert_eq!(store.read("a.txt").expect("read"), "one");

        store.write("a.txt", "two").expect("overwrite");
        assert_eq!(store.read("a.txt").expect("read"), "two");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn read_missing_file() {
        let store = MemoryStore::new();
        let err = store.read("ghost.txt").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("ghost.txt"));
    }

    #[test]
    fn delete_removes_file() {
        let store = MemoryStore::new();
        store.write("a.txt", "x").expect("write");
        store.delete("a.txt").expect("delete");
        assert!(!store.contains("a.txt"));
        assert!(store.delete("a.txt").unwrap_err().is_not_found());
    }

    #[test]
    fn list_is_sorted() {
        let store = MemoryStore::new();
        store.write("zebra.txt", "z").expect("write");
        store.write("alpha.txt", "a").expect("write");
        store.write("mango.txt", "m").expect("write");

        assert_eq!(
            store.list().expect("list"),
            vec![
                "alpha.txt".to_string(),
                "mango.txt".to_string(),
                "zebra.txt".to_string()
            ]
        );
    }

    #[test]
    fn empty_content_is_still_a_file() {
        let store = MemoryStore::new();
        store.write("empty.txt", "").expect("write");
        assert!(store.contains("empty.txt"));
        assert_eq!(store.read("empty.txt").expect("read"), "");
    }

    #[test]
    fn shared_across_threads() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let path = format!("file-{i}.txt");
                    store.write(&path, "data").expect("write");
                    assert_eq!(store.read(&path).expect("read"), "data");
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread panicked");
        }

        assert_eq!(store.len(), 4);
    }
}
