//! Desktop shell UI composition: launcher, settings button, and the active window.

pub(crate) mod a11y;
mod window;
mod work_tile;

use desktop_app_contract::{AccentColor, AppId, ThemeMode};
use leptos::*;
use system_ui::{
    Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    Icon, IconName, IconSize,
};

use self::{window::AppWindow, work_tile::WorkTile};
use crate::{apps, host::launcher_tile_dom_id, reducer::SessionAction};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// CSS custom properties exposing the accent palette to the stylesheet.
pub(crate) fn accent_style(accent: AccentColor) -> String {
    format!(
        "--accent:{};--accent-hover:{};--accent-light:{};--accent-border:{};",
        accent.hex(),
        accent.hover_hex(),
        accent.light_rgba(),
        accent.border_rgba()
    )
}

/// Full-bleed desktop wallpaper matching the theme mode.
pub(crate) fn wallpaper_style(mode: ThemeMode) -> String {
    let image = match mode {
        ThemeMode::Dark => "/background-dark.png",
        ThemeMode::Light => "/background-light.png",
    };
    format!(
        "background-image:url({image});background-size:cover;background-position:center;\
         background-repeat:no-repeat;"
    )
}

#[component]
fn LauncherTile(app_id: AppId, label: String, icon: IconName) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let minimized = Signal::derive(move || runtime.session.with(|s| s.is_minimized_app(app_id)));

    view! {
        <DesktopIconButton
            icon
            label
            id=launcher_tile_dom_id(app_id.slug())
            minimized
            on_click=Callback::new(move |_| runtime.open_app(app_id))
        />
    }
}

#[component]
/// Portfolio desktop: launcher tiles, the settings button, and the single active window.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = runtime.session;
    let theme = runtime.theme;

    let theme_token = Signal::derive(move || theme.get().mode.as_str().to_string());
    let root_style = Signal::derive(move || accent_style(theme.get().accent));
    let wallpaper = Signal::derive(move || wallpaper_style(theme.get().mode));
    let visible_generation = create_memo(move |_| session.with(|s| s.visible_generation()));
    let is_maximized = Signal::derive(move || session.with(|s| s.is_maximized));

    let on_close = Callback::new(move |()| runtime.dispatch_action(SessionAction::CloseApp));
    let on_minimize = Callback::new(move |()| runtime.dispatch_action(SessionAction::MinimizeApp));
    let on_maximize =
        Callback::new(move |()| runtime.dispatch_action(SessionAction::ToggleMaximize));

    let tiles = apps::launcher_apps()
        .map(|manifest| match manifest.app_id {
            AppId::Work => view! { <WorkTile label=manifest.tile_label.clone() /> },
            app_id => view! {
                <LauncherTile
                    app_id
                    label=manifest.tile_label.clone()
                    icon=IconName::from_token(&manifest.icon).unwrap_or(IconName::Folder)
                />
            },
        })
        .collect_view();

    view! {
        <DesktopRoot id="desktop-shell-root" theme=theme_token style=root_style>
            <DesktopBackdrop wallpaper>
                <Button
                    variant=ButtonVariant::Quiet
                    ui_slot="settings-launcher"
                    id=launcher_tile_dom_id(AppId::Settings.slug())
                    aria_label="Settings"
                    on_click=Callback::new(move |_| runtime.open_app(AppId::Settings))
                >
                    <Icon icon=IconName::Settings size=IconSize::Md />
                </Button>
                <DesktopIconGrid aria_label="Applications">{tiles}</DesktopIconGrid>
            </DesktopBackdrop>
            {move || {
                visible_generation.get()?;
                let active = session.with_untracked(|s| s.active.clone())?;
                Some(view! {
                    <AppWindow
                        active
                        is_maximized
                        on_close
                        on_minimize
                        on_maximize
                    />
                })
            }}
        </DesktopRoot>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accent_style_exposes_every_tone() {
        assert_eq!(
            accent_style(AccentColor::Green),
            "--accent:#10b981;--accent-hover:#059669;--accent-light:rgba(16, 185, 129, 0.2);\
             --accent-border:rgba(16, 185, 129, 0.3);"
        );
    }

    #[test]
    fn wallpaper_follows_theme_mode() {
        assert!(wallpaper_style(ThemeMode::Dark)
            .starts_with("background-image:url(/background-dark.png);"));
        assert_eq!(
            wallpaper_style(ThemeMode::Light),
            "background-image:url(/background-light.png);background-size:cover;\
             background-position:center;background-repeat:no-repeat;"
        );
    }
}
