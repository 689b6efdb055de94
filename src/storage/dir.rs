//! Directory-backed file storage.
//!
//! Every stored name maps to one regular file directly inside the storage
//! directory. The namespace is flat: names containing path separators, or
//! starting with `.`, are rejected. Writes go to a hidden temp file that is
//! then renamed over the target, so a file is never left half written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{validate_name, FileStorage, StorageError};

/// A [`FileStorage`] rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    /// Opens (creating if needed) the storage directory at `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| StorageError::Io {
            name: root.display().to_string(),
            source,
        })?;
        tracing::debug!(root = %root.display(), "opened directory storage");
        Ok(Self { root })
    }

    /// Returns the directory holding the files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_name(name)?;
        if name.starts_with('.') || name.contains(['/', '\\']) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(name))
    }

    /// Writes `data` next to `path` and renames it into place.
    fn write_file_atomic(&self, name: &str, path: &Path, data: &[u8]) -> Result<(), StorageError> {
        let temp_path = self.root.join(format!(".{}.tmp", name));
        let io_err = |source| StorageError::Io {
            name: name.to_string(),
            source,
        };
        fs::write(&temp_path, data).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;
        Ok(())
    }
}

impl FileStorage for DirStorage {
    fn save(&mut self, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.path_for(name)?;
        self.write_file_atomic(name, &path, content.as_bytes())?;
        tracing::debug!(name, chars = content.chars().count(), "file saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<String>, StorageError> {
        if name.is_empty() {
            return Ok(None);
        }
        let path = self.path_for(name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let entries = fs::read_dir(&self.root).map_err(|source| StorageError::Io {
            name: self.root.display().to_string(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .collect();
        names.sort();
        Ok(names)
    }

    fn delete(&mut self, name: &str) -> Result<bool, StorageError> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(name, "file deleted");
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StorageError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
