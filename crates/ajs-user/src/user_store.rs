use crate::{LegacyUser, Traits};

use ajs_config::{ConfigErrorResult, IdentityOptions};
use ajs_storage::{CookieOptions, CookieStore, LocalStore};

use std::sync::Arc;

use chrono::Duration;
use log::{debug, info, warn};
use serde_json::Value;

/// User id and traits, durable or memory-only depending on `persist`.
///
/// With `persist` on, the cookie and local store are the source of truth and
/// every read goes to them. With it off, `id` and `traits` below are used
/// and the backends are left alone.
///
/// Storage failures never reach the caller: reads degrade to "absent",
/// writes are dropped, and both are logged.
pub struct UserStore {
    options: IdentityOptions,
    cookies: Arc<dyn CookieStore>,
    local: Arc<dyn LocalStore>,
    pub(crate) id: Option<String>,
    pub(crate) traits: Traits,
}

impl UserStore {
    pub fn new(cookies: Arc<dyn CookieStore>, local: Arc<dyn LocalStore>) -> Self {
        Self::with_options(IdentityOptions::default(), cookies, local)
    }

    pub fn with_options(
        options: IdentityOptions,
        cookies: Arc<dyn CookieStore>,
        local: Arc<dyn LocalStore>,
    ) -> Self {
        Self {
            options,
            cookies,
            local,
            id: None,
            traits: Traits::default(),
        }
    }

    /// Current effective options.
    pub fn options(&self) -> &IdentityOptions {
        &self.options
    }

    /// Deep-merges `patch` over the built-in defaults and stores the result.
    ///
    /// Earlier custom options are not the base. On error the current options
    /// stay in place.
    pub fn set_options(&mut self, patch: Value) -> ConfigErrorResult<&IdentityOptions> {
        self.options = IdentityOptions::from_patch(patch)?;
        debug!("Identity options updated (persist: {})", self.options.persist);
        Ok(&self.options)
    }

    pub fn replace_options(&mut self, options: IdentityOptions) -> &IdentityOptions {
        self.options = options;
        &self.options
    }

    pub fn id(&self) -> Option<String> {
        if !self.options.persist {
            return self.id.clone();
        }

        self.read_cookie(&self.options.cookie.key)
    }

    /// `None` clears the id.
    pub fn set_id(&mut self, id: Option<&str>) {
        if !self.options.persist {
            self.id = id.map(str::to_string);
            return;
        }

        self.write_id_cookie(id);
    }

    /// Owned copy of the current traits, never shared with internal state.
    pub fn traits(&self) -> Traits {
        if !self.options.persist {
            return self.traits.clone();
        }

        match self.local.get(&self.options.local_storage.key) {
            Ok(Some(value)) => Traits::from_value(value),
            Ok(None) => Traits::default(),
            Err(e) => {
                warn!(
                    "Failed to read traits from {}: {e} ({})",
                    self.options.local_storage.key,
                    e.recovery_hint()
                );
                Traits::default()
            }
        }
    }

    /// `None` stores an empty mapping.
    pub fn set_traits(&mut self, traits: Option<Traits>) {
        let traits = traits.unwrap_or_default();

        if !self.options.persist {
            self.traits = traits;
            return;
        }

        self.write_traits(&traits);
    }

    /// Like [`set_traits`](Self::set_traits) for untyped input; anything but
    /// a JSON object is stored as an empty mapping.
    pub fn set_traits_value(&mut self, value: Value) {
        if !value.is_object() && !value.is_null() {
            debug!("Ignoring non-object traits value, storing empty traits");
        }

        self.set_traits(Some(Traits::from_value(value)));
    }

    /// Binds `id` and folds `traits` into the profile.
    ///
    /// Identifying as a different id starts that id with `traits` alone.
    /// Identifying as the same id (or with no id) merges `traits` over the
    /// existing ones. An empty id counts as no id. An id-less profile is
    /// carried into the first id unless `carry_anonymous_traits` is off.
    pub fn identify(&mut self, id: Option<&str>, traits: Option<Traits>) {
        let id = id.filter(|id| !id.is_empty());
        let traits = traits.unwrap_or_default();
        let existing = self.id();

        let id_changed = match (id, existing.as_deref()) {
            (None, _) => false,
            (Some(new_id), Some(current)) => new_id != current,
            (Some(_), None) => !self.options.carry_anonymous_traits,
        };

        let traits = if id_changed {
            info!("Identified new user, resetting traits");
            traits
        } else {
            let mut merged = self.traits();
            merged.merge(traits);
            merged
        };

        if id.is_some() {
            self.set_id(id);
        }
        self.set_traits(Some(traits));
        self.save();
    }

    /// Rewrites the current id and traits to the durable backends,
    /// refreshing the cookie lifetime.
    ///
    /// Returns `false` without touching any backend when `persist` is off.
    pub fn save(&mut self) -> bool {
        if !self.options.persist {
            return false;
        }

        let id = self.id();
        self.write_id_cookie(id.as_deref());

        let traits = self.traits();
        self.write_traits(&traits);

        true
    }

    /// Migrates the legacy combined cookie when no current id exists.
    ///
    /// The legacy cookie is left in place. Unparsable legacy data is logged
    /// and ignored.
    pub fn load(&mut self) {
        if self.id().is_some() {
            return;
        }

        let old_key = self.options.cookie.old_key.clone();
        let Some(raw) = self.read_cookie(&old_key) else {
            debug!("No identity stored yet");
            return;
        };

        match LegacyUser::parse(&raw) {
            Ok(legacy) => {
                info!("Migrating identity from legacy cookie {old_key}");
                let traits = legacy.traits();
                self.set_id(legacy.id.as_deref());
                self.set_traits(Some(traits));
            }
            Err(e) => {
                warn!("Legacy cookie {old_key} is malformed, skipping migration: {e}");
            }
        }
    }

    /// Clears id and traits from memory and both backends, whatever
    /// `persist` is set to.
    pub fn logout(&mut self) {
        self.id = None;
        self.traits = Traits::default();

        if let Err(e) = self.cookies.remove(&self.options.cookie.key) {
            warn!(
                "Failed to remove cookie {}: {e} ({})",
                self.options.cookie.key,
                e.recovery_hint()
            );
        }

        if let Err(e) = self.local.remove(&self.options.local_storage.key) {
            warn!(
                "Failed to remove traits {}: {e} ({})",
                self.options.local_storage.key,
                e.recovery_hint()
            );
        }

        info!("Logged out");
    }

    /// Restores default options and clears in-memory state. Backends are
    /// not touched.
    pub fn reset(&mut self) {
        self.options = IdentityOptions::default();
        self.id = None;
        self.traits = Traits::default();
    }

    fn cookie_options(&self) -> CookieOptions {
        let cookie = &self.options.cookie;

        CookieOptions {
            max_age: i64::try_from(cookie.max_age)
                .ok()
                .and_then(Duration::try_seconds),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
        }
    }

    fn read_cookie(&self, key: &str) -> Option<String> {
        match self.cookies.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read cookie {key}: {e} ({})", e.recovery_hint());
                None
            }
        }
    }

    fn write_id_cookie(&self, id: Option<&str>) {
        let key = &self.options.cookie.key;

        let result = match id {
            Some(id) => self.cookies.set(key, id, &self.cookie_options()),
            None => self.cookies.remove(key),
        };

        if let Err(e) = result {
            warn!("Failed to write cookie {key}: {e} ({})", e.recovery_hint());
        }
    }

    fn write_traits(&self, traits: &Traits) {
        let key = &self.options.local_storage.key;

        if let Err(e) = self.local.set(key, &traits.to_value()) {
            warn!("Failed to write traits {key}: {e} ({})", e.recovery_hint());
        }
    }
}
