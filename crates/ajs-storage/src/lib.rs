//! Key/value backends the identity store persists through.
//!
//! Two capabilities, each a trait so callers can inject their own:
//! - [`CookieStore`]: string values with cookie attributes
//! - [`LocalStore`]: structured JSON values

pub mod cookie_store;
pub mod disabled_store;
pub mod error;
pub mod json_file_store;
pub mod load_result;
pub mod local_store;
pub mod memory_cookie_jar;
pub mod memory_local_store;

pub use cookie_store::{CookieOptions, CookieStore};
pub use disabled_store::DisabledStore;
pub use error::{Result, StorageError};
pub use json_file_store::JsonFileStore;
pub use load_result::LoadResult;
pub use local_store::LocalStore;
pub use memory_cookie_jar::{MemoryCookieJar, StoredCookie};
pub use memory_local_store::MemoryLocalStore;
