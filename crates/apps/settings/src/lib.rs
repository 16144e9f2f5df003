//! Built-in Settings app for the shell appearance: theme mode and accent colour.
//!
//! The app reads and writes preferences through the injected [`desktop_app_contract::ThemeService`]
//! so every change flows through the desktop runtime's theme store and is persisted there.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{use_app_services, AccentColor, ThemeMode, ThemeService};
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SettingsSection {
    #[default]
    Appearance,
}

impl SettingsSection {
    const ALL: [SettingsSection; 1] = [Self::Appearance];

    fn label(self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
        }
    }
}

const MODE_OPTIONS: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    }
}

fn mode_icon(mode: ThemeMode) -> IconName {
    match mode {
        ThemeMode::Light => IconName::Sun,
        ThemeMode::Dark => IconName::Moon,
    }
}

fn swatch_style(accent: AccentColor) -> String {
    format!("background-color:{};", accent.hex())
}

#[component]
fn ThemeModeCards(theme: ThemeService) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm>
            <Heading>"Theme Mode"</Heading>
            <Text tone=TextTone::Secondary>"Select your preferred theme mode"</Text>
            <Cluster gap=LayoutGap::Md>
                {MODE_OPTIONS
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <Button
                                variant=ButtonVariant::Standard
                                size=ButtonSize::Lg
                                ui_slot="theme-mode-card"
                                aria_label=format!("{} mode", mode_label(mode))
                                selected=Signal::derive(move || theme.mode() == mode)
                                on_click=Callback::new(move |_| theme.set_mode(mode))
                            >
                                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                                    <Icon icon=mode_icon(mode) size=IconSize::Lg />
                                    <Text role=TextRole::Label>{mode_label(mode)}</Text>
                                </Stack>
                            </Button>
                        }
                    })
                    .collect_view()}
            </Cluster>
        </Stack>
    }
}

#[component]
fn AccentSwatches(theme: ThemeService) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm>
            <Heading>"Accent Color"</Heading>
            <Text tone=TextTone::Secondary>"Choose your preferred accent color"</Text>
            <Grid gap=LayoutGap::Sm ui_slot="accent-grid">
                {AccentColor::ALL
                    .into_iter()
                    .map(|accent| {
                        let selected = Signal::derive(move || theme.accent() == accent);
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                ui_slot="accent-swatch"
                                aria_label=format!("{} accent", accent.label())
                                selected=selected
                                on_click=Callback::new(move |_| theme.set_accent(accent))
                            >
                                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                                    <span class="settings-swatch" style=swatch_style(accent)></span>
                                    <Cluster gap=LayoutGap::Sm>
                                        <Text role=TextRole::Caption>{accent.label()}</Text>
                                        <Show when=move || selected.get()>
                                            <Icon icon=IconName::Check size=IconSize::Sm />
                                        </Show>
                                    </Cluster>
                                </Stack>
                            </Button>
                        }
                    })
                    .collect_view()}
            </Grid>
        </Stack>
    }
}

#[component]
/// Settings app window contents.
pub fn SettingsApp() -> impl IntoView {
    let section = create_rw_signal(SettingsSection::default());
    let services = use_app_services();
    if services.is_none() {
        logging::warn!("settings opened without app services; appearance is read-only");
    }

    let panel = move || match (section.get(), services) {
        (SettingsSection::Appearance, Some(services)) => view! {
            <Stack gap=LayoutGap::Lg>
                <ThemeModeCards theme=services.theme />
                <AccentSwatches theme=services.theme />
            </Stack>
        }
        .into_view(),
        (SettingsSection::Appearance, None) => {
            view! { <EmptyState>"Appearance settings are unavailable."</EmptyState> }.into_view()
        }
    };

    view! {
        <Cluster gap=LayoutGap::None align=LayoutAlign::Stretch layout_class="settings-app">
            <Panel variant=SurfaceVariant::Muted elevation=Elevation::Flat ui_slot="sidebar">
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>"Settings"</Text>
                    {SettingsSection::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    selected=Signal::derive(move || section.get() == entry)
                                    on_click=Callback::new(move |_| section.set(entry))
                                >
                                    {entry.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>
            <Panel padding=LayoutPadding::Lg ui_slot="content">
                {panel}
            </Panel>
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppCommand, AppServices, ThemePreferences};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mode_cards_cover_both_modes_in_order() {
        let labels: Vec<_> = MODE_OPTIONS.into_iter().map(mode_label).collect();
        assert_eq!(labels, vec!["Light", "Dark"]);
        assert_eq!(mode_icon(ThemeMode::Dark), IconName::Moon);
    }

    #[test]
    fn swatches_paint_the_palette_colour() {
        assert_eq!(swatch_style(AccentColor::Orange), "background-color:#f59e0b;");
    }

    #[test]
    fn theme_service_forwards_selection_as_commands() {
        let runtime = create_runtime();
        let sent = create_rw_signal(Vec::<AppCommand>::new());
        let preferences = create_rw_signal(ThemePreferences::default());
        let services = AppServices::new(
            Callback::new(move |command| sent.update(|sent| sent.push(command))),
            preferences.into(),
        );

        services.theme.set_mode(ThemeMode::Light);
        services.theme.set_accent(AccentColor::Pink);

        assert_eq!(
            sent.get_untracked(),
            vec![
                AppCommand::SetThemeMode(ThemeMode::Light),
                AppCommand::SetAccentColor(AccentColor::Pink),
            ]
        );
        runtime.dispose();
    }
}
