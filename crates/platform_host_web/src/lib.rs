//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Off the web target every adapter degrades to an inert stand-in so the crate still builds and
//! tests on the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod local_prefs;

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

pub use external_url::WebExternalUrlService;
pub use local_prefs::WebPrefsStore;

/// Host strategy for the active compilation target.
pub const fn selected_host_strategy() -> HostStrategy {
    if cfg!(target_arch = "wasm32") {
        HostStrategy::Browser
    } else {
        HostStrategy::Headless
    }
}

/// Builds the service bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            external_urls: Rc::new(WebExternalUrlService),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices::headless(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_select_headless_services() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(selected_host_strategy().as_str(), "headless");
    }
}
