use crate::Result;

use chrono::Duration;

/// Attributes applied when a cookie is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// `None` writes a session cookie
    pub max_age: Option<Duration>,
    pub domain: Option<String>,
    pub path: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age: None,
            domain: None,
            path: String::from("/"),
        }
    }
}

/// Cookie-like backend: string values under string keys.
pub trait CookieStore: Send + Sync {
    /// Returns `Ok(None)` for missing and expired cookies.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<()>;

    /// Removing a missing cookie is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
