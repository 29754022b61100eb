mod save;

use crate::UserStore;

use ajs_storage::{MemoryCookieJar, MemoryLocalStore};

use std::sync::Arc;

pub(crate) const COOKIE_KEY: &str = "ajs_user_id";
pub(crate) const OLD_COOKIE_KEY: &str = "ajs_user";
pub(crate) const LOCAL_KEY: &str = "ajs_user_traits";

/// A store wired to in-memory backends the test can inspect directly.
pub(crate) struct Fixture {
    pub(crate) cookies: Arc<MemoryCookieJar>,
    pub(crate) local: Arc<MemoryLocalStore>,
    pub(crate) user: UserStore,
}

pub(crate) fn fixture() -> Fixture {
    let cookies = Arc::new(MemoryCookieJar::new());
    let local = Arc::new(MemoryLocalStore::new());
    let user = UserStore::new(cookies.clone(), local.clone());

    Fixture {
        cookies,
        local,
        user,
    }
}

pub(crate) fn memory_only() -> Fixture {
    let mut fx = fixture();
    fx.user
        .set_options(serde_json::json!({ "persist": false }))
        .unwrap();
    fx
}

/// Builds traits from a `json!` object literal.
pub(crate) fn traits(value: serde_json::Value) -> crate::Traits {
    crate::Traits::from_value(value)
}
