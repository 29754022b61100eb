use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_KEY, DEFAULT_COOKIE_MAX_AGE_SECS,
    DEFAULT_COOKIE_OLD_KEY, DEFAULT_COOKIE_PATH, MAX_COOKIE_MAX_AGE_SECS,
};

use serde::{Deserialize, Serialize};

/// Durable id cookie settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CookieConfig {
    /// Cookie holding the user id
    pub key: String,
    /// Legacy combined `{id, traits}` cookie, only ever read
    pub old_key: String,
    /// Lifetime in seconds, refreshed on every write
    pub max_age: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            key: String::from(DEFAULT_COOKIE_KEY),
            old_key: String::from(DEFAULT_COOKIE_OLD_KEY),
            max_age: DEFAULT_COOKIE_MAX_AGE_SECS,
            domain: None,
            path: String::from(DEFAULT_COOKIE_PATH),
        }
    }
}

impl CookieConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::cookie("cookie.key must not be empty"));
        }

        if self.old_key.trim().is_empty() {
            return Err(ConfigError::cookie("cookie.oldKey must not be empty"));
        }

        // Migration would read back the cookie it just wrote.
        if self.key == self.old_key {
            return Err(ConfigError::cookie(format!(
                "cookie.key and cookie.oldKey must differ, both are '{}'",
                self.key
            )));
        }

        if self.max_age == 0 || self.max_age > MAX_COOKIE_MAX_AGE_SECS {
            return Err(ConfigError::cookie(format!(
                "cookie.maxAge must be 1-{}, got {}",
                MAX_COOKIE_MAX_AGE_SECS, self.max_age
            )));
        }

        if !self.path.starts_with('/') {
            return Err(ConfigError::cookie(format!(
                "cookie.path must start with '/', got '{}'",
                self.path
            )));
        }

        if let Some(domain) = &self.domain
            && domain.trim().is_empty()
        {
            return Err(ConfigError::cookie(
                "cookie.domain must be omitted rather than empty",
            ));
        }

        Ok(())
    }
}
