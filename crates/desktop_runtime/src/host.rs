//! Host-side helpers for executing reducer effects and querying the browser environment.

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{ExternalUrlService, HostServices, PrefsStore};

use crate::{
    components::a11y,
    model::{Size, FALLBACK_VIEWPORT},
    reducer::RuntimeEffect,
};

/// DOM id of the mounted window frame.
pub const WINDOW_DOM_ID: &str = "desktop-window";

/// DOM id of the launcher tile for `slug`.
pub fn launcher_tile_dom_id(slug: &str) -> String {
    format!("launcher-tile-{slug}")
}

#[derive(Clone)]
/// Host service bundle used by the runtime for side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    external_urls: Rc<dyn ExternalUrlService>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    /// Wraps the injected host services.
    pub fn new(services: HostServices) -> Self {
        Self {
            prefs: services.prefs,
            external_urls: services.external_urls,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Preference store backing the theme.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes one [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindow => {
                a11y::focus_element_by_id_deferred(WINDOW_DOM_ID.to_string());
            }
            RuntimeEffect::FocusLauncherTile(app_id) => {
                a11y::focus_element_by_id_deferred(launcher_tile_dom_id(app_id.slug()));
            }
        }
    }

    /// Opens `url` outside the shell, logging failures.
    pub fn open_external_url(&self, url: &str) {
        let url = url.to_string();
        let external_urls = self.external_urls.clone();
        spawn_local(async move {
            if let Err(err) = external_urls.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        });
    }

    /// Current browser viewport, or the fallback size off the web target.
    pub fn viewport_size(&self) -> Size {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window.inner_width().ok().and_then(|value| value.as_f64());
                let height = window.inner_height().ok().and_then(|value| value.as_f64());
                if let (Some(width), Some(height)) = (width, height) {
                    let size = Size::new(width, height);
                    if size.is_usable() {
                        return size;
                    }
                }
            }
        }

        FALLBACK_VIEWPORT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_host_reports_fallback_viewport() {
        let host = DesktopHostContext::new(HostServices::headless());
        assert_eq!(host.viewport_size(), FALLBACK_VIEWPORT);
        assert_eq!(host.host_strategy_name(), "headless");
        assert_eq!(launcher_tile_dom_id("dino-game"), "launcher-tile-dino-game");
    }
}
