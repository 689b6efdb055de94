//! Named file storage.
//!
//! The shell and the editor never touch the filesystem directly. They go through
//! the [`FileStorage`] trait, a flat key/value store mapping a file name to its
//! text content. Two implementations are provided:
//!
//! - [`MemoryStorage`]: an in-memory map, used by tests and `--ephemeral` sessions
//! - [`DirStorage`]: one file per name inside a single directory
//!
//! # Example
//!
//! ```
//! use termquill::storage::{FileStorage, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! storage.save("notes.txt", "hello").unwrap();
//! assert!(storage.exists("notes.txt"));
//! assert_eq!(storage.load("notes.txt").unwrap().as_deref(), Some("hello"));
//! assert_eq!(storage.list().unwrap(), vec!["notes.txt".to_string()]);
//! ```

pub mod dir;
pub mod memory;

pub use dir::DirStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors reported by a [`FileStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Filename cannot be empty")]
    EmptyName,

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("{name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A flat store of named text files.
pub trait FileStorage {
    /// Stores `content` under `name`, replacing any previous content.
    fn save(&mut self, name: &str, content: &str) -> Result<(), StorageError>;

    /// Returns the content stored under `name`, or `None` if there is none.
    fn load(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Returns true if a file called `name` exists.
    fn exists(&self, name: &str) -> bool;

    /// Returns all file names in sorted order.
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Removes `name`. Returns false if it did not exist.
    fn delete(&mut self, name: &str) -> Result<bool, StorageError>;

    /// Returns the size of `name` in characters, or `None` if it does not exist.
    fn size(&self, name: &str) -> Option<usize> {
        self.load(name)
            .ok()
            .flatten()
            .map(|content| content.chars().count())
    }

    /// Human readable location of the store, shown by `sysinfo`.
    fn location(&self) -> String;
}

/// Rejects names that cannot be used as storage keys.
pub(crate) fn validate_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() {
        return Err(StorageError::EmptyName);
    }
    Ok(())
}

/// Formats a size the way `ls -l` shows it.
///
/// # Examples
///
/// ```
/// use termquill::storage::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 bytes");
/// assert_eq!(format_file_size(1), "1 byte");
/// assert_eq!(format_file_size(512), "512 bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(size: usize) -> String {
    match size {
        0 => "0 bytes".to_string(),
        1 => "1 byte".to_string(),
        n if n < 1024 => format!("{} bytes", n),
        n if n < 1024 * 1024 => format!("{:.1} KB", n as f64 / 1024.0),
        n => format!("{:.1} MB", n as f64 / (1024.0 * 1024.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_rejects_empty() {
        assert!(matches!(validate_name(""), Err(StorageError::EmptyName)));
        assert!(validate_name("a").is_ok());
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }
}
