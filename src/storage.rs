use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Byte sink a rendered sitemap is written to
pub trait Storage {
    /// Write `content` to `path`, replacing anything already there.
    ///
    /// Returns the number of bytes written.
    fn write_all(&self, path: &Path, content: &[u8]) -> io::Result<usize>;
}

/// Writes to the local filesystem. Parent directories must already exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl Storage for FileStorage {
    fn write_all(&self, path: &Path, content: &[u8]) -> io::Result<usize> {
        std::fs::write(path, content)?;
        Ok(content.len())
    }
}

/// Keeps written documents in memory, keyed by path
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents last written to `path`
    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().get(path.as_ref()).cloned()
    }

    /// Number of distinct paths written
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A poisoned map still holds valid data
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn write_all(&self, path: &Path, content: &[u8]) -> io::Result<usize> {
        self.lock().insert(path.to_path_buf(), content.to_vec());
        Ok(content.len())
    }
}
