//! Host-service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{ExternalUrlService, MemoryPrefsStore, NoopExternalUrlService, PrefsStore};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// In-memory composition used off the web target.
    Headless,
}

impl HostStrategy {
    /// Returns a stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// Environment-specific selection happens before this bundle crosses into `desktop_runtime`, so
/// the runtime and app crates never depend on browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Preference store used for appearance settings.
    pub prefs: Rc<dyn PrefsStore>,
    /// External link opener.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// In-memory bundle for tests and non-browser targets.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(NoopExternalUrlService),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
