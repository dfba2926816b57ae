//! Session
//!
//! The login flag lives in client storage under [`LOGIN_FLAG_KEY`]. It is read
//! once at startup into a [`Session`] value that components receive through
//! context, and written back only on sign-in and sign-out.
//!
//! This is a placeholder gate: there is no expiry, no signature and no
//! server-side check.

/// Client storage key for the login flag
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";

/// Minimal key/value storage the session is persisted in
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
///
/// Every operation is a no-op (or `None`) when storage is unavailable, e.g.
/// in private browsing with storage disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Who is looking at the dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Rebuild the session from storage. Any non-empty flag value counts.
    pub fn restore(store: &impl SessionStore) -> Self {
        let authenticated = store
            .get(LOGIN_FLAG_KEY)
            .is_some_and(|flag| !flag.is_empty());
        Self { authenticated }
    }

    /// Persist the flag and return an authenticated session
    pub fn sign_in(store: &impl SessionStore) -> Self {
        store.set(LOGIN_FLAG_KEY, "true");
        Self {
            authenticated: true,
        }
    }

    /// Remove the flag and return an anonymous session
    pub fn sign_out(store: &impl SessionStore) -> Self {
        store.remove(LOGIN_FLAG_KEY);
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store for tests
    #[derive(Default)]
    pub(crate) struct MemoryStore(RefCell<HashMap<String, String>>);

    impl MemoryStore {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.set(key, value);
            store
        }
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn test_restore_without_flag() {
        let session = Session::restore(&MemoryStore::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_with_any_value() {
        for value in ["true", "1", "yes", "false"] {
            let session = Session::restore(&MemoryStore::with(LOGIN_FLAG_KEY, value));
            assert!(session.is_authenticated(), "flag value {:?}", value);
        }
    }

    #[test]
    fn test_restore_with_empty_value() {
        let session = Session::restore(&MemoryStore::with(LOGIN_FLAG_KEY, ""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_sign_in_then_out() {
        let store = MemoryStore::default();

        let session = Session::sign_in(&store);
        assert!(session.is_authenticated());
        assert!(Session::restore(&store).is_authenticated());

        let session = Session::sign_out(&store);
        assert!(!session.is_authenticated());
        assert_eq!(store.get(LOGIN_FLAG_KEY), None);
    }
}
