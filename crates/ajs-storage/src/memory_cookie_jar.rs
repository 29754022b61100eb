use crate::{CookieOptions, CookieStore, Result, StorageError};

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use log::debug;

const STORE_NAME: &str = "MemoryCookieJar";

/// A cookie as held by [`MemoryCookieJar`], attributes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub value: String,
    pub domain: Option<String>,
    pub path: String,
    /// `None` for session cookies
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredCookie {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// In-process cookie jar honouring max-age.
///
/// Domain and path are recorded but not matched; every key lives in one jar.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RwLock<HashMap<String, StoredCookie>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full cookie record, expired or not.
    pub fn cookie(&self, key: &str) -> Result<Option<StoredCookie>> {
        let cookies = self
            .cookies
            .read()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        Ok(cookies.get(key).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        let cookies = self
            .cookies
            .read()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        Ok(cookies.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl CookieStore for MemoryCookieJar {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let cookies = self
            .cookies
            .read()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;

        Ok(cookies
            .get(key)
            .filter(|cookie| !cookie.is_expired(Utc::now()))
            .map(|cookie| cookie.value.clone()))
    }

    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<()> {
        let mut cookies = self
            .cookies
            .write()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;

        // A non-positive max-age deletes, as in a browser.
        if let Some(max_age) = options.max_age
            && max_age <= chrono::Duration::zero()
        {
            debug!("Cookie {key} written with max-age {max_age}, removing");
            cookies.remove(key);
            return Ok(());
        }

        let cookie = StoredCookie {
            value: value.to_string(),
            domain: options.domain.clone(),
            path: options.path.clone(),
            expires_at: options.max_age.map(|max_age| Utc::now() + max_age),
        };
        cookies.insert(key.to_string(), cookie);

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut cookies = self
            .cookies
            .write()
            .map_err(|_| StorageError::lock_poisoned(STORE_NAME))?;
        cookies.remove(key);
        Ok(())
    }
}
