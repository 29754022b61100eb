use crate::{LoadResult, LocalStore, Result, StorageError};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info, warn};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const FILE_EXTENSION: &str = "json";

/// Durable [`LocalStore`] keeping one JSON document per key in a directory.
///
/// Writes go through a temp file, fsync and rename so a crash mid-write
/// never leaves a half-written value behind.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    /// Serializes writers within this process; temp names only carry the pid.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::dir_creation(dir.clone(), e))?;

        info!("Opened JSON file store at {dir:?}");
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Gets the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::invalid_key(key, "key must not be empty"));
        }

        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StorageError::invalid_key(
                key,
                "key must not contain path separators",
            ));
        }

        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    /// Loads the value stored under `key`.
    ///
    /// Returns:
    /// - `Ok(LoadResult { value: Some(...), corruption_error: None })` - loaded successfully
    /// - `Ok(LoadResult { value: None, corruption_error: None })` - nothing stored yet
    /// - `Ok(LoadResult { value: None, corruption_error: Some(...) })` - file exists but corrupted
    pub fn load(&self, key: &str) -> Result<LoadResult> {
        let path = self.path_for(key)?;

        if !path.exists() {
            debug!("No stored value at {path:?}");
            return Ok(LoadResult {
                value: None,
                corruption_error: None,
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StorageError::file_read(path.clone(), e))?;

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => Ok(LoadResult {
                value: Some(value),
                corruption_error: None,
            }),
            Err(e) => {
                warn!("Stored value corrupted at {path:?}: {e}");
                Ok(LoadResult {
                    value: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    /// Backs up a corrupted file for debugging.
    ///
    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self, key: &str) -> Result<Option<PathBuf>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{FILE_EXTENSION}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(StorageError::backup_failed)?;

        warn!("Backed up corrupted value to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl LocalStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let loaded = self.load(key)?;

        if loaded.corruption_error.is_some() {
            self.backup_corrupted(key)?;
        }

        Ok(loaded.value)
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let final_path = self.path_for(key)?;
        let temp_path = self.dir.join(format!(
            "{key}.{FILE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        let json = serde_json::to_string_pretty(value)?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::lock_poisoned("JsonFileStore"))?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored {key} at {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StorageError::lock_poisoned("JsonFileStore"))?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {key} at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_write(path, e)),
        }
    }
}
