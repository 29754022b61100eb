use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOCAL_STORAGE_KEY};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalStorageConfig {
    /// Slot holding the traits object
    pub key: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            key: String::from(DEFAULT_LOCAL_STORAGE_KEY),
        }
    }
}

impl LocalStorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::local_storage(
                "localStorage.key must not be empty",
            ));
        }

        Ok(())
    }
}
