use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Session-store key names, as they appear in the browser session.
pub mod keys {
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const USER_NAME: &str = "userName";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_PHONE: &str = "userPhone";
    pub const USER_COLLEGE: &str = "userCollege";
    pub const EPOCH_ID: &str = "epochId";
    pub const LOGIN_TIME: &str = "loginTime";
    pub const REMEMBERED_USER: &str = "rememberedUser";

    /// Every key removed on logout. The identity must vanish as a unit.
    pub const CLEARED_ON_LOGOUT: &[&str] = &[
        IS_LOGGED_IN,
        USER_NAME,
        USER_EMAIL,
        USER_PHONE,
        USER_COLLEGE,
        EPOCH_ID,
        LOGIN_TIME,
        REMEMBERED_USER,
    ];
}

/// An abstract, string-valued key-value store scoped to the current session.
///
/// Cloning is inexpensive; all clones share the same underlying map. Reads
/// and writes take the interior lock individually, but [`set_many`] and
/// [`remove_many`] apply their whole batch under one write-lock acquisition
/// so multi-key updates are never observed half-applied.
///
/// [`set_many`]: SessionStore::set_many
/// [`remove_many`]: SessionStore::remove_many
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<FxHashMap<String, String>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.read().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.inner.write().remove(key);
    }

    /// Inserts every pair under a single write-lock acquisition.
    pub fn set_many<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut guard = self.inner.write();
        for (key, value) in pairs {
            guard.insert(key.into(), value.into());
        }
    }

    /// Removes every key under a single write-lock acquisition.
    pub fn remove_many<'a>(&self, keys: impl IntoIterator<Item = &'a str>) {
        let mut guard = self.inner.write();
        for key in keys {
            guard.remove(key);
        }
    }

    /// Clears the whole identity. After this returns, every session key is
    /// gone; a reader never sees a partially cleared identity.
    pub fn logout(&self) {
        self.remove_many(keys::CLEARED_ON_LOGOUT.iter().copied());
        debug!("session cleared");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = SessionStore::new();
        store.set(keys::USER_NAME, "Alice");
        assert_eq!(store.get(keys::USER_NAME).as_deref(), Some("Alice"));
        store.remove(keys::USER_NAME);
        assert_eq!(store.get(keys::USER_NAME), None);
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let view = store.clone();
        store.set(keys::EPOCH_ID, "EPOCH001");
        assert_eq!(view.get(keys::EPOCH_ID).as_deref(), Some("EPOCH001"));
    }
}
