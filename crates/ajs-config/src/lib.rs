mod cookie_config;
mod error;
mod identity_options;
mod local_storage_config;
mod merge;

pub use cookie_config::CookieConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_options::IdentityOptions;
pub use local_storage_config::LocalStorageConfig;
pub use merge::merge_json;

#[cfg(test)]
mod tests;

const DEFAULT_PERSIST: bool = true;
const DEFAULT_CARRY_ANONYMOUS_TRAITS: bool = true;
const DEFAULT_COOKIE_KEY: &str = "ajs_user_id";
const DEFAULT_COOKIE_OLD_KEY: &str = "ajs_user";
const DEFAULT_COOKIE_PATH: &str = "/";
/// One year.
const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;
/// Browsers cap cookie lifetimes at 400 days.
const MAX_COOKIE_MAX_AGE_SECS: u64 = 400 * 24 * 60 * 60;
const DEFAULT_LOCAL_STORAGE_KEY: &str = "ajs_user_traits";

const CONFIG_DIR_ENV: &str = "AJS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ajs";
const CONFIG_FILENAME: &str = "identity.toml";
