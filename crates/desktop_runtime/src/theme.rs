//! Observable appearance store initialised once at start-up.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use desktop_app_contract::ThemePreferences;
use platform_host::{HostError, PrefsStore};
use thiserror::Error;

use crate::persistence::{load_theme_preferences, persist_theme_preferences};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Appearance persistence failures.
pub enum ThemeError {
    /// Reading a stored key failed.
    #[error("failed to load `{key}`: {source}")]
    Load {
        /// Preference key.
        key: &'static str,
        /// Host failure.
        #[source]
        source: HostError,
    },
    /// Writing a key failed.
    #[error("failed to persist `{key}`: {source}")]
    Persist {
        /// Preference key.
        key: &'static str,
        /// Host failure.
        #[source]
        source: HostError,
    },
}

type Listener = Rc<dyn Fn(ThemePreferences)>;

struct ThemeStoreInner {
    prefs: Rc<dyn PrefsStore>,
    current: Cell<ThemePreferences>,
    touched: Cell<bool>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
}

#[derive(Clone)]
/// Appearance preferences with change notification and persistence.
pub struct ThemeStore {
    inner: Rc<ThemeStoreInner>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.get())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Creates a store with default preferences backed by `prefs`.
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            inner: Rc::new(ThemeStoreInner {
                prefs,
                current: Cell::new(ThemePreferences::default()),
                touched: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Current preferences.
    pub fn get(&self) -> ThemePreferences {
        self.inner.current.get()
    }

    /// Replaces the preferences and notifies subscribers when they changed.
    pub fn set(&self, preferences: ThemePreferences) -> bool {
        self.inner.touched.set(true);
        self.replace(preferences)
    }

    fn replace(&self, preferences: ThemePreferences) -> bool {
        if self.inner.current.replace(preferences) == preferences {
            return false;
        }
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(preferences);
        }
        true
    }

    /// Registers `listener` for future changes until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(ThemePreferences) + 'static) -> ThemeSubscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        ThemeSubscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Loads stored preferences once. Values set locally before the load finishes win.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] when the store cannot be read; the current value is kept.
    pub async fn hydrate(&self) -> Result<ThemePreferences, ThemeError> {
        let prefs = self.inner.prefs.clone();
        let loaded = load_theme_preferences(prefs.as_ref()).await?;
        if !self.inner.touched.get() {
            self.replace(loaded);
        }
        Ok(self.get())
    }

    /// Writes the current preferences to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Persist`] when a write fails.
    pub async fn persist(&self) -> Result<(), ThemeError> {
        let prefs = self.inner.prefs.clone();
        persist_theme_preferences(prefs.as_ref(), self.get()).await
    }
}

/// Live subscription returned by [`ThemeStore::subscribe`].
#[derive(Debug)]
pub struct ThemeSubscription {
    store: std::rc::Weak<ThemeStoreInner>,
    id: u64,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AccentColor, ThemeMode};
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, NoopPrefsStore};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::persistence::{ACCENT_KEY, THEME_KEY};

    fn light_green() -> ThemePreferences {
        ThemePreferences {
            mode: ThemeMode::Light,
            accent: AccentColor::Green,
        }
    }

    #[test]
    fn hydrate_reads_stored_strings_once() {
        let prefs = MemoryPrefsStore::with_entries([(THEME_KEY, "light"), (ACCENT_KEY, "green")]);
        let store = ThemeStore::new(Rc::new(prefs));
        assert_eq!(store.get(), ThemePreferences::default());

        assert_eq!(block_on(store.hydrate()).expect("hydrate"), light_green());
        assert_eq!(store.get(), light_green());
    }

    #[test]
    fn local_changes_win_over_late_hydration() {
        let prefs = MemoryPrefsStore::with_entries([(THEME_KEY, "light")]);
        let store = ThemeStore::new(Rc::new(prefs));
        let chosen = ThemePreferences {
            mode: ThemeMode::Dark,
            accent: AccentColor::Pink,
        };
        store.set(chosen);

        block_on(store.hydrate()).expect("hydrate");
        assert_eq!(store.get(), chosen);
    }

    #[test]
    fn set_notifies_until_unsubscribed_and_persists() {
        let prefs = MemoryPrefsStore::default();
        let store = ThemeStore::new(Rc::new(prefs.clone()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let seen = seen.clone();
            store.subscribe(move |preferences| seen.borrow_mut().push(preferences))
        };
        assert!(store.set(light_green()));
        assert!(!store.set(light_green()));
        block_on(store.persist()).expect("persist");

        drop(subscription);
        store.set(ThemePreferences::default());

        assert_eq!(*seen.borrow(), vec![light_green()]);
        assert_eq!(prefs.peek(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(prefs.peek(ACCENT_KEY).as_deref(), Some("green"));
    }

    #[test]
    fn empty_store_hydrates_to_defaults() {
        let store = ThemeStore::new(Rc::new(NoopPrefsStore));
        assert_eq!(
            block_on(store.hydrate()).expect("hydrate"),
            ThemePreferences::default()
        );
    }
}
