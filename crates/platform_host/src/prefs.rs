//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use crate::HostError;

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small string preference values keyed by name.
///
/// Values are stored verbatim; callers decide how to parse them.
pub trait PrefsStore {
    /// Loads the raw value stored under `key`.
    fn load_pref<'a>(&'a self, key: &'a str)
        -> PrefsStoreFuture<'a, Result<Option<String>, HostError>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), HostError>>;

    /// Deletes `key`.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, HostError>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), HostError>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), HostError>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets tests inspect what a runtime persisted.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<'e>(entries: impl IntoIterator<Item = (&'e str, &'e str)>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }

    /// Returns the current value of `key` without going through the async trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, HostError>> {
        Box::pin(async move { Ok(self.peek(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_prefs_store_saves_and_deletes() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("theme", "light")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("theme")).expect("load"),
            Some("light".to_string())
        );
        block_on(store_obj.delete_pref("theme")).expect("delete");
        assert_eq!(block_on(store_obj.load_pref("theme")).expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_entries() {
        let store = MemoryPrefsStore::with_entries([("accentColor", "green")]);
        let clone = store.clone();
        block_on(clone.save_pref("theme", "dark")).expect("save");

        assert_eq!(store.peek("theme").as_deref(), Some("dark"));
        assert_eq!(store.peek("accentColor").as_deref(), Some("green"));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "v")).expect("save");
        block_on(store_obj.delete_pref("k")).expect("delete");
    }
}
