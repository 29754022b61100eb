use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CookieConfig,
    DEFAULT_CARRY_ANONYMOUS_TRAITS, DEFAULT_CONFIG_DIR, DEFAULT_PERSIST, LocalStorageConfig,
    merge_json,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Effective configuration of a user identity store.
///
/// Field names serialize in camelCase so that partial option objects coming
/// from the tracking library (`{"cookie": {"oldKey": ...}}`) merge directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityOptions {
    /// Durable (cookie + local storage) or memory-only identity
    pub persist: bool,
    pub cookie: CookieConfig,
    pub local_storage: LocalStorageConfig,
    /// Merge an id-less profile into the first identified id instead of
    /// starting that id with a clean profile
    pub carry_anonymous_traits: bool,
    /// Keys this crate does not know about, kept as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for IdentityOptions {
    fn default() -> Self {
        Self {
            persist: DEFAULT_PERSIST,
            cookie: CookieConfig::default(),
            local_storage: LocalStorageConfig::default(),
            carry_anonymous_traits: DEFAULT_CARRY_ANONYMOUS_TRAITS,
            extra: Map::new(),
        }
    }
}

impl IdentityOptions {
    /// Deep-merge a partial options object over the built-in defaults.
    ///
    /// The base is always the defaults, never a previously customised value,
    /// so applying the same patch twice yields the same options.
    pub fn from_patch(patch: Value) -> ConfigErrorResult<Self> {
        let mut merged =
            serde_json::to_value(Self::default()).map_err(ConfigError::from_serde_error)?;

        merge_json(&mut merged, patch);

        serde_json::from_value(merged).map_err(ConfigError::from_serde_error)
    }

    /// Load options with the same layering the rest of the stack uses.
    ///
    /// Loading order:
    /// 1. Check for AJS_CONFIG_DIR env var, else use ./.ajs/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load identity.toml if it exists, else use defaults
    /// 4. Apply AJS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut options = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Self::default()
        };

        options.apply_env_overrides();

        Ok(options)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AJS_CONFIG_DIR env var > ./.ajs/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.cookie.validate()?;
        self.local_storage.validate()?;

        if self.cookie.key == self.local_storage.key {
            return Err(ConfigError::config(format!(
                "cookie.key and localStorage.key must differ, both are '{}'",
                self.cookie.key
            )));
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Identity options:");
        info!(
            "  persist: {}",
            if self.persist { "durable" } else { "memory" }
        );
        info!(
            "  cookie: key={}, oldKey={}, maxAge={}s, path={}, domain={}",
            self.cookie.key,
            self.cookie.old_key,
            self.cookie.max_age,
            self.cookie.path,
            self.cookie.domain.as_deref().unwrap_or("<host>")
        );
        info!("  localStorage: key={}", self.local_storage.key);
        info!("  carryAnonymousTraits: {}", self.carry_anonymous_traits);

        if !self.extra.is_empty() {
            let keys: Vec<&str> = self.extra.keys().map(String::as_str).collect();
            info!("  extra: {}", keys.join(", "));
        }
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_bool("AJS_PERSIST", &mut self.persist);
        Self::apply_env_bool(
            "AJS_CARRY_ANONYMOUS_TRAITS",
            &mut self.carry_anonymous_traits,
        );

        // Cookie
        Self::apply_env_string("AJS_COOKIE_KEY", &mut self.cookie.key);
        Self::apply_env_string("AJS_COOKIE_OLD_KEY", &mut self.cookie.old_key);
        Self::apply_env_parse("AJS_COOKIE_MAX_AGE_SECS", &mut self.cookie.max_age);
        Self::apply_env_option_string("AJS_COOKIE_DOMAIN", &mut self.cookie.domain);
        Self::apply_env_string("AJS_COOKIE_PATH", &mut self.cookie.path);

        // Local storage
        Self::apply_env_string("AJS_LOCAL_STORAGE_KEY", &mut self.local_storage.key);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
