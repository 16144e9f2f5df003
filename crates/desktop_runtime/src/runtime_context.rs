//! Runtime provider and context wiring for the portfolio shell.
//!
//! This module owns the session reducer container, the runtime effect queue, the theme store, and
//! the command bridge handed to apps. UI composition stays in [`crate::components`].

use desktop_app_contract::{
    provide_app_services, AppCommand, AppId, AppServices, ThemePreferences,
};
use leptos::*;
use platform_host::HostServices;

use crate::{
    apps, effect_executor,
    host::DesktopHostContext,
    lifecycle::ListenerLedger,
    model::{AppSession, Size},
    reducer::{reduce_session, RuntimeEffect, SessionAction},
    theme::ThemeStore,
};

#[derive(Clone, Copy)]
/// Leptos context for reading session state and dispatching [`SessionAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive window-host state.
    pub session: RwSignal<AppSession>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
    /// Last measured browser viewport.
    pub viewport: RwSignal<Size>,
    /// Outstanding gesture-listener leases across all windows.
    pub listeners: StoredValue<ListenerLedger>,
    /// Reactive mirror of the theme store.
    pub theme: RwSignal<ThemePreferences>,
    /// Observable appearance store.
    pub theme_store: StoredValue<ThemeStore>,
    /// Service handles given to apps.
    pub services: AppServices,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }

    /// Opens `app_id` with its manifest defaults.
    pub fn open_app(&self, app_id: AppId) {
        self.dispatch_action(SessionAction::OpenApp(apps::default_open_request(app_id)));
    }
}

/// Appearance preferences after applying `command`, or `None` for non-theme commands.
pub(crate) fn theme_after_command(
    current: ThemePreferences,
    command: &AppCommand,
) -> Option<ThemePreferences> {
    match command {
        AppCommand::SetThemeMode(mode) => Some(ThemePreferences {
            mode: *mode,
            ..current
        }),
        AppCommand::SetAccentColor(accent) => Some(ThemePreferences {
            accent: *accent,
            ..current
        }),
        AppCommand::OpenApp(_) | AppCommand::CloseWindow | AppCommand::OpenExternalUrl(_) => None,
    }
}

fn apply_theme(theme_store: StoredValue<ThemeStore>, preferences: ThemePreferences) {
    let store = theme_store.get_value();
    if !store.set(preferences) {
        return;
    }
    spawn_local(async move {
        if let Err(err) = store.persist().await {
            logging::warn!("theme persistence failed: {err}");
        }
    });
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    let store = runtime.theme_store.get_value();
    let theme = runtime.theme;
    let subscription = store.subscribe(move |preferences| theme.set(preferences));
    let subscription = store_value(Some(subscription));
    on_cleanup(move || subscription.set_value(None));

    spawn_local(async move {
        match store.hydrate().await {
            Ok(preferences) => logging::log!(
                "theme hydrated: {} / {}",
                preferences.mode.as_str(),
                preferences.accent.as_str()
            ),
            Err(err) => logging::warn!("theme hydrate failed: {err}"),
        }
    });

    let viewport = runtime.viewport;
    let host = runtime.host;
    let resize = window_event_listener(ev::resize, move |_| {
        viewport.set(host.get_value().viewport_size());
    });
    on_cleanup(move || resize.remove());

    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] and [`AppServices`] to descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// App to open on boot, e.g. from a deep link.
    #[prop(default = None)]
    initial_app: Option<AppId>,
    children: Children,
) -> impl IntoView {
    let host_context = DesktopHostContext::new(host_services);
    logging::log!("desktop host strategy: {}", host_context.host_strategy_name());
    let theme_store = ThemeStore::new(host_context.prefs_store());
    let viewport = create_rw_signal(host_context.viewport_size());
    let host = store_value(host_context);
    let session = create_rw_signal(AppSession::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let theme = create_rw_signal(theme_store.get());
    let theme_store = store_value(theme_store);
    let listeners = store_value(ListenerLedger::new());

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut next = session.get_untracked();
        match reduce_session(&mut next, action) {
            Ok(new_effects) => {
                if next != session.get_untracked() {
                    session.set(next);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("session reducer error: {err}"),
        }
    });

    let sender = Callback::new(move |command: AppCommand| {
        if let Some(preferences) = theme_after_command(theme_store.get_value().get(), &command) {
            apply_theme(theme_store, preferences);
            return;
        }
        match command {
            AppCommand::OpenApp(request) => dispatch.call(SessionAction::OpenApp(request)),
            AppCommand::CloseWindow => dispatch.call(SessionAction::CloseApp),
            AppCommand::OpenExternalUrl(url) => host.get_value().open_external_url(&url),
            AppCommand::SetThemeMode(_) | AppCommand::SetAccentColor(_) => {}
        }
    });

    let services = AppServices::new(sender, theme.into());
    provide_app_services(services);

    let runtime = DesktopRuntimeContext {
        host,
        session,
        effects,
        dispatch,
        viewport,
        listeners,
        theme,
        theme_store,
        services,
    };
    provide_context(runtime);

    install_runtime_orchestration(runtime);

    if let Some(app_id) = initial_app {
        runtime.open_app(app_id);
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AccentColor, ThemeMode};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_commands_update_only_their_field() {
        let current = ThemePreferences {
            mode: ThemeMode::Dark,
            accent: AccentColor::Green,
        };

        assert_eq!(
            theme_after_command(current, &AppCommand::SetThemeMode(ThemeMode::Light)),
            Some(ThemePreferences {
                mode: ThemeMode::Light,
                accent: AccentColor::Green,
            })
        );
        assert_eq!(
            theme_after_command(current, &AppCommand::SetAccentColor(AccentColor::Pink)),
            Some(ThemePreferences {
                mode: ThemeMode::Dark,
                accent: AccentColor::Pink,
            })
        );
        assert_eq!(theme_after_command(current, &AppCommand::CloseWindow), None);
        assert_eq!(
            theme_after_command(
                current,
                &AppCommand::OpenExternalUrl("mailto:hello@example.com".to_string())
            ),
            None
        );
    }
}
