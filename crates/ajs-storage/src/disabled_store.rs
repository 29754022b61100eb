use crate::{CookieOptions, CookieStore, LocalStore, Result, StorageError};

use serde_json::Value;

/// Backend standing in for storage the host has turned off (private
/// browsing, blocked cookies). Every call fails with `Unavailable`.
#[derive(Debug, Clone)]
pub struct DisabledStore {
    reason: String,
}

impl DisabledStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Default for DisabledStore {
    fn default() -> Self {
        Self::new("storage disabled")
    }
}

impl CookieStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(StorageError::unavailable(self.reason.clone()))
    }

    fn set(&self, _key: &str, _value: &str, _options: &CookieOptions) -> Result<()> {
        Err(StorageError::unavailable(self.reason.clone()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(StorageError::unavailable(self.reason.clone()))
    }
}

impl LocalStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<Value>> {
        Err(StorageError::unavailable(self.reason.clone()))
    }

    fn set(&self, _key: &str, _value: &Value) -> Result<()> {
        Err(StorageError::unavailable(self.reason.clone()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(StorageError::unavailable(self.reason.clone()))
    }
}
