//! App catalog built from the app crates' manifests, plus render dispatch.

use std::sync::OnceLock;

use desktop_app_about::AboutApp;
use desktop_app_arcade::{DinoGameApp, FlappyBirdApp};
use desktop_app_contact::ContactApp;
use desktop_app_contract::{AppContent, AppId, OpenAppRequest, SizeClass};
use desktop_app_projects::ProjectsApp;
use desktop_app_settings::SettingsApp;
use desktop_app_work::WorkApp;
use leptos::*;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Launcher metadata for one app.
pub struct AppManifest {
    /// App identity.
    pub app_id: AppId,
    /// Default window title.
    pub display_name: String,
    /// Text under the launcher tile.
    pub tile_label: String,
    /// Icon token understood by [`system_ui::IconName::from_token`].
    pub icon: String,
    /// Default window size.
    pub size_class: SizeClass,
    /// Launcher position.
    pub launcher_order: u32,
    /// Whether a tile is rendered.
    pub show_on_launcher: bool,
}

/// Every manifest in launcher order.
pub fn app_catalog() -> &'static [AppManifest] {
    static CATALOG: OnceLock<Vec<AppManifest>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_MANIFEST_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("app manifest catalog is unreadable: {err}");
            Vec::new()
        })
    })
}

/// Manifests that get a launcher tile.
pub fn launcher_apps() -> impl Iterator<Item = &'static AppManifest> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_on_launcher)
}

/// Manifest for `app_id`.
pub fn app_manifest(app_id: AppId) -> Option<&'static AppManifest> {
    app_catalog()
        .iter()
        .find(|manifest| manifest.app_id == app_id)
}

/// Renders the window contents for `app_id`.
pub fn render_app(app_id: AppId) -> View {
    match app_id {
        AppId::About => view! { <AboutApp /> }.into_view(),
        AppId::Work => view! { <WorkApp /> }.into_view(),
        AppId::Projects => view! { <ProjectsApp /> }.into_view(),
        AppId::Contact => view! { <ContactApp /> }.into_view(),
        AppId::Settings => view! { <SettingsApp /> }.into_view(),
        AppId::FlappyBird => view! { <FlappyBirdApp /> }.into_view(),
        AppId::DinoGame => view! { <DinoGameApp /> }.into_view(),
    }
}

/// Launcher request for `app_id` with the manifest's title and size.
pub fn default_open_request(app_id: AppId) -> OpenAppRequest {
    let request = OpenAppRequest::new(app_id, AppContent::new(app_id, move || render_app(app_id)));
    match app_manifest(app_id) {
        Some(manifest) => request
            .with_title(manifest.display_name.clone())
            .with_size_hint(manifest.size_class),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_covers_every_app_once() {
        let mut ids: Vec<_> = app_catalog().iter().map(|manifest| manifest.app_id).collect();
        ids.sort();
        let mut expected = AppId::ALL.to_vec();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn launcher_tiles_follow_manifest_order_without_settings() {
        let tiles: Vec<_> = launcher_apps().map(|manifest| manifest.app_id).collect();
        assert_eq!(
            tiles,
            vec![
                AppId::About,
                AppId::Work,
                AppId::Projects,
                AppId::Contact,
                AppId::FlappyBird,
                AppId::DinoGame,
            ]
        );
    }

    #[test]
    fn games_open_small_and_others_medium() {
        for manifest in app_catalog() {
            let expected = match manifest.app_id {
                AppId::FlappyBird | AppId::DinoGame => SizeClass::Small,
                _ => SizeClass::Medium,
            };
            assert_eq!(manifest.size_class, expected, "{}", manifest.app_id);
        }
    }

    #[test]
    fn every_manifest_icon_resolves() {
        for manifest in app_catalog() {
            assert!(
                system_ui::IconName::from_token(&manifest.icon).is_some(),
                "{} uses unknown icon `{}`",
                manifest.app_id,
                manifest.icon
            );
        }
    }

    #[test]
    fn default_request_uses_manifest_title_and_size() {
        let request = default_open_request(AppId::FlappyBird);
        assert_eq!(request.resolved_title(), "Flappy Bird");
        assert_eq!(request.resolved_size_class(), SizeClass::Small);
        assert!(!request.start_maximized);
        assert_eq!(request.content.kind(), AppId::FlappyBird);
    }
}
