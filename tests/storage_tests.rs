use tempfile::TempDir;
use termquill::storage::{DirStorage, FileStorage, MemoryStorage, StorageError};

/// Checks the behaviour every backend must share.
fn exercise(storage: &mut dyn FileStorage) {
    assert!(storage.list().unwrap().is_empty());
    assert_eq!(storage.load("missing.txt").unwrap(), None);
    assert_eq!(storage.load("").unwrap(), None);

    storage.save("b.txt", "second").unwrap();
    storage.save("a.txt", "first\nline").unwrap();
    assert_eq!(storage.list().unwrap(), vec!["a.txt", "b.txt"]);
    assert!(storage.exists("a.txt"));
    assert_eq!(storage.size("a.txt"), Some(10));
    assert_eq!(storage.size("zzz"), None);

    storage.save("a.txt", "replaced").unwrap();
    assert_eq!(storage.load("a.txt").unwrap().as_deref(), Some("replaced"));

    assert!(storage.delete("a.txt").unwrap());
    assert!(!storage.delete("a.txt").unwrap());
    assert!(!storage.exists("a.txt"));

    assert!(matches!(storage.save("", "x"), Err(StorageError::EmptyName)));
}

#[test]
fn test_memory_storage_contract() {
    exercise(&mut MemoryStorage::new());
}

#[test]
fn test_dir_storage_contract() {
    let dir = TempDir::new().unwrap();
    exercise(&mut DirStorage::open(dir.path()).unwrap());
}

#[test]
fn test_dir_storage_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    {
        let mut storage = DirStorage::open(dir.path()).unwrap();
        storage.save("keep.txt", "still here").unwrap();
    }
    let storage = DirStorage::open(dir.path()).unwrap();
    assert_eq!(
        storage.load("keep.txt").unwrap().as_deref(),
        Some("still here")
    );
}

#[test]
fn test_dir_storage_rejects_paths() {
    let dir = TempDir::new().unwrap();
    let mut storage = DirStorage::open(dir.path()).unwrap();
    for name in ["../escape", "sub/file", ".hidden"] {
        assert!(
            matches!(storage.save(name, "x"), Err(StorageError::InvalidName(_))),
            "{}",
            name
        );
    }
}

#[test]
fn test_dir_storage_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");
    let storage = DirStorage::open(&root).unwrap();
    assert!(root.is_dir());
    assert_eq!(storage.location(), root.display().to_string());
}

#[test]
fn test_size_counts_characters() {
    let mut storage = MemoryStorage::new();
    storage.save("u.txt", "é").unwrap();
    assert_eq!(storage.size("u.txt"), Some(1));
}
