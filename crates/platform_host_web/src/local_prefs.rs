//! `localStorage`-backed preference store.
//!
//! The browser API is synchronous; the async [`PrefsStore`] impl wraps it in ready futures.

use platform_host::{HostError, PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, HostError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(HostError::Unavailable("localStorage"))
}

impl WebPrefsStore {
    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the read throws.
    pub fn read(self, key: &str) -> Result<Option<String>, HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| HostError::Storage(format!("get_item({key}) failed: {err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the quota is exceeded.
    pub fn write(self, key: &str, value: &str) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| HostError::Storage(format!("set_item({key}) failed: {err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete throws.
    pub fn remove(self, key: &str) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| HostError::Storage(format!("remove_item({key}) failed: {err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, HostError>> {
        let store = *self;
        Box::pin(async move { store.read(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), HostError>> {
        let store = *self;
        Box::pin(async move { store.write(key, value) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), HostError>> {
        let store = *self;
        Box::pin(async move { store.remove(key) })
    }
}
