//! Browser external-URL adapter.

use platform_host::{ExternalUrlFuture, ExternalUrlService, HostError};

#[derive(Debug, Clone, Copy, Default)]
/// Opens links in a new browser tab via `window.open`.
pub struct WebExternalUrlService;

#[cfg(target_arch = "wasm32")]
fn open_in_new_tab(url: &str) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|err| HostError::Navigation {
            url: url.to_string(),
            reason: format!("{err:?}"),
        })?;
    if opened.is_none() && !url.starts_with("mailto:") {
        return Err(HostError::Navigation {
            url: url.to_string(),
            reason: "popup blocked".to_string(),
        });
    }
    Ok(())
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                open_in_new_tab(url)
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Err(HostError::Unavailable("window"))
            }
        })
    }
}
