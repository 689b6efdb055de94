//! In-memory file storage.

use std::collections::BTreeMap;

use super::{validate_name, FileStorage, StorageError};

/// A [`FileStorage`] that keeps every file in a sorted map.
///
/// Nothing survives the process; this is the backend used by tests and by
/// `--ephemeral` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `(name, content)` pairs.
    pub fn with_files<I, N, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            files: files
                .into_iter()
                .map(|(name, content)| (name.into(), content.into()))
                .collect(),
        }
    }
}

impl FileStorage for MemoryStorage {
    fn save(&mut self, name: &str, content: &str) -> Result<(), StorageError> {
        validate_name(name)?;
        self.files.insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<String>, StorageError> {
        if name.is_empty() {
            return Ok(None);
        }
        Ok(self.files.get(name).cloned())
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.files.keys().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> Result<bool, StorageError> {
        Ok(self.files.remove(name).is_some())
    }

    fn location(&self) -> String {
        "in-memory (discarded on exit)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_rejects_empty_name() {
        let mut storage = MemoryStorage::new();
        assert!(matches!(
            storage.save("", "x"),
            Err(StorageError::EmptyName)
        ));
    }

    #[test]
    fn test_list_is_sorted() {
        let storage = MemoryStorage::with_files([("b.txt", ""), ("a.txt", "")]);
        assert_eq!(storage.list().unwrap(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_delete_reports_missing() {
        let mut storage = MemoryStorage::with_files([("a", "1")]);
        assert!(storage.delete("a").unwrap());
        assert!(!storage.delete("a").unwrap());
    }

    #[test]
    fn test_size_counts_characters() {
        let storage = MemoryStorage::with_files([("u", "héllo")]);
        assert_eq!(storage.size("u"), Some(5));
        assert_eq!(storage.size("missing"), None);
    }
}
