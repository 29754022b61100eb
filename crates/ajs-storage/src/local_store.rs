use crate::Result;

use serde_json::Value;

/// Structured-storage backend: JSON values under string keys.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>>;

    fn set(&self, key: &str, value: &Value) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
