//! Key-value storage backends.
//!
//! This module provides the [`StorageBackend`] trait, the string-valued
//! key-value seam the store persists through, along with [`FileBackend`]
//! for on-disk storage and [`MemoryBackend`] for tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Trait for string-valued key-value storage.
///
/// This trait allows swapping the on-disk backend for an in-memory one
/// in tests.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Remove the value stored under `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// File-based backend: one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at the given data directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Default data directory (`~/.fitfuel`).
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".fitfuel")
    }

    /// Get the file path backing a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path).map(Some)
    }

    /// Store a value using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption
    /// if the process crashes or loses power during the write operation.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.key_path(key);

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-memory backend for headless tests.
///
/// Can be configured to fail writes, for exercising persistence error
/// paths without a real disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a single key.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries,
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail with a permission error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "write disabled",
            ));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "write disabled",
            ));
        }
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_backend_get_missing_key_returns_none() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::new(temp.path());

        assert!(backend.get("missing").unwrap().is_none());
    }

    #[test]
    fn file_backend_set_and_get() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());

        backend.set("greeting", "hello").unwrap();

        assert_eq!(backend.get("greeting").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn file_backend_set_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());

        backend.set("key", "first").unwrap();
        backend.set("key", "second").unwrap();

        assert_eq!(backend.get("key").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_backend_creates_missing_dir_on_write() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested").join("dir");
        let mut backend = FileBackend::new(&nested);

        backend.set("key", "value").unwrap();

        assert_eq!(backend.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn file_backend_set_uses_atomic_write() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());

        backend.set("key", "value").unwrap();

        // Verify no temp file remains (it should have been renamed)
        let temp_path = backend.key_path("key").with_extension("tmp");
        assert!(
            !temp_path.exists(),
            "Temp file should not exist after successful write"
        );
    }

    #[test]
    fn file_backend_remove_deletes_key() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());

        backend.set("key", "value").unwrap();
        backend.remove("key").unwrap();

        assert!(backend.get("key").unwrap().is_none());
    }

    #[test]
    fn file_backend_remove_missing_key_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());

        assert!(backend.remove("missing").is_ok());
    }

    #[test]
    fn memory_backend_set_and_get() {
        let mut backend = MemoryBackend::new();

        backend.set("key", "value").unwrap();

        assert_eq!(backend.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn memory_backend_with_entry() {
        let backend = MemoryBackend::with_entry("key", "seeded");

        assert_eq!(backend.get("key").unwrap().as_deref(), Some("seeded"));
    }

    #[test]
    fn memory_backend_fail_writes() {
        let mut backend = MemoryBackend::new();
        backend.fail_writes(true);

        assert!(backend.set("key", "value").is_err());
        assert!(backend.get("key").unwrap().is_none());
    }
}
