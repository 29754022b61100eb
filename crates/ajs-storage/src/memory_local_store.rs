use crate::{LocalStore, Result, StorageError};

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

const STORE_NAME: &str = "MemoryLocalStore";

/// In-process structured store.
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let values = self
            .values
            .read()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        Ok(values.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let values = self
            .values
            .read()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        values.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        values.remove(key);
        Ok(())
    }
}
