//! String key-value storage backing the best score.

use crate::error::Result;
use crate::utils::persistence::{load_json_or_default, save_json};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Minimal key-value store. Values are strings; callers parse them.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Storage persisted as a JSON object on disk. Every write rewrites the file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing or corrupt file opens empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let items = load_json_or_default(&path);
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        save_json(&self.path, &self.items)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            save_json(&self.path, &self.items)?;
        }
        Ok(())
    }
}

/// In-memory storage, used when no data directory exists and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("flappy-storage-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("bestScore"), None);

        storage.set_item("bestScore", "7").unwrap();
        assert_eq!(storage.get_item("bestScore").as_deref(), Some("7"));

        storage.remove_item("bestScore").unwrap();
        assert_eq!(storage.get_item("bestScore"), None);
    }

    #[test]
    fn test_file_storage_persists_across_opens() {
        let path = scratch_path("persist.json");
        fs::remove_file(&path).ok();

        let mut storage = FileStorage::open(&path);
        storage.set_item("bestScore", "42").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item("bestScore").as_deref(), Some("42"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_storage_corrupt_file_opens_empty() {
        let path = scratch_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get_item("bestScore"), None);

        fs::remove_file(path).ok();
    }
}
