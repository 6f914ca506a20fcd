use super::backend::StorageBackend;
use crate::error::{AdScribeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory-backed key-value storage: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AdScribeError::Io)?;
        }
        Ok(())
    }

    fn check_key(key: &str) -> Result<()> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AdScribeError::Store(format!("Invalid storage key: '{}'", key)));
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::check_key(key)?;
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(AdScribeError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::check_key(key)?;
        self.ensure_root()?;

        let target = self.key_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(AdScribeError::Io)?;
        fs::rename(&tmp, target).map_err(AdScribeError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::check_key(key)?;
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(AdScribeError::Io)?;
        }
        Ok(())
    }
}
