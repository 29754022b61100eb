use ajs_storage::{JsonFileStore, MemoryCookieJar};
use ajs_user::UserStore;

use std::sync::Arc;

use tempfile::TempDir;

/// One browser profile: a cookie jar plus durable local storage on disk.
///
/// Every call to [`page_load`](Self::page_load) builds a fresh store over the
/// same backends, like a reload of the page.
pub struct TestBrowser {
    pub cookies: Arc<MemoryCookieJar>,
    pub local: Arc<JsonFileStore>,
    _dir: TempDir,
}

impl TestBrowser {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let local = JsonFileStore::open(dir.path().join("local-storage"))
            .expect("Failed to open local store");

        Self {
            cookies: Arc::new(MemoryCookieJar::new()),
            local: Arc::new(local),
            _dir: dir,
        }
    }

    /// A freshly constructed, loaded store over this profile's backends.
    pub fn page_load(&self) -> UserStore {
        let mut user = UserStore::new(self.cookies.clone(), self.local.clone());
        user.load();
        user
    }
}
