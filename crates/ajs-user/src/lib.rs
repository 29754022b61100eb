//! Client-side user identity cache.
//!
//! [`UserStore`] keeps a user id and a trait mapping either in durable
//! backends (a cookie for the id, a local store for the traits) or, with
//! `persist` off, in memory only.

pub mod legacy_user;
pub mod traits;
pub mod user_store;

pub use legacy_user::LegacyUser;
pub use traits::Traits;
pub use user_store::UserStore;

pub use ajs_config::{ConfigError, ConfigErrorResult, IdentityOptions};

#[cfg(test)]
mod tests;
