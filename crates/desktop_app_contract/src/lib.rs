//! Shared contract types between the portfolio window host and the apps it launches.
//!
//! The window host never inspects what an app renders: it receives an [`OpenAppRequest`] carrying
//! an opaque [`AppContent`] payload plus a title and size hint. Apps talk back to the host through
//! the capability-scoped [`AppServices`] bundle, which the runtime provides as Leptos context.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::{provide_context, use_context, Callable, Callback, Signal, SignalGet, View};
use serde::{Deserialize, Serialize};

/// Closed set of apps the launcher knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Biography viewer.
    About,
    /// Work-history timeline.
    Work,
    /// Project gallery and browser.
    Projects,
    /// Contact card.
    Contact,
    /// Appearance settings panel.
    Settings,
    /// Flappy-style arcade game.
    FlappyBird,
    /// Endless-runner arcade game.
    DinoGame,
}

impl AppId {
    /// Every app id in launcher order.
    pub const ALL: [AppId; 7] = [
        Self::About,
        Self::Work,
        Self::Projects,
        Self::Contact,
        Self::Settings,
        Self::FlappyBird,
        Self::DinoGame,
    ];

    /// Returns the stable slug used in manifests, deep links, and DOM ids.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Work => "work",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::FlappyBird => "flappy-bird",
            Self::DinoGame => "dino-game",
        }
    }

    /// Parses a slug produced by [`AppId::slug`].
    pub fn from_slug(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.slug().eq_ignore_ascii_case(raw))
    }

    /// Returns the fallback window title for the app.
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Work => "Work",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
            Self::Settings => "Settings",
            Self::FlappyBird => "Flappy Bird",
            Self::DinoGame => "Dino Game",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Named default-dimension preset expressed as a fraction of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    /// Half the viewport.
    Small,
    /// Seventy percent of the viewport.
    #[default]
    Medium,
    /// Ninety percent of the viewport.
    Large,
}

impl SizeClass {
    /// Fraction of the viewport width and height used for the default window size.
    pub const fn viewport_fraction(self) -> f64 {
        match self {
            Self::Small => 0.5,
            Self::Medium => 0.7,
            Self::Large => 0.9,
        }
    }

    /// Returns a stable token for DOM data attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Render capability for window contents.
pub type RenderFn = Rc<dyn Fn() -> View>;

/// Opaque renderable payload handed to the window host.
///
/// Equality is identity of the render closure, so a restored session can be told apart from a
/// freshly opened one without ever invoking the closure.
#[derive(Clone)]
pub struct AppContent {
    kind: AppId,
    render: RenderFn,
}

impl AppContent {
    /// Wraps a render closure for `kind`.
    pub fn new(kind: AppId, render: impl Fn() -> View + 'static) -> Self {
        Self {
            kind,
            render: Rc::new(render),
        }
    }

    /// Returns the app this payload belongs to.
    pub fn kind(&self) -> AppId {
        self.kind
    }

    /// Renders a fresh view of the contents.
    pub fn render(&self) -> View {
        (self.render)()
    }
}

impl PartialEq for AppContent {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && Rc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for AppContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContent")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Request to show an app in the host window.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAppRequest {
    /// App being opened.
    pub app_id: AppId,
    /// Opaque window contents.
    pub content: AppContent,
    /// Window title; falls back to [`AppId::title`].
    pub title: Option<String>,
    /// Size-class hint; falls back to [`SizeClass::Medium`].
    pub size_hint: Option<SizeClass>,
    /// Opens the window already maximized (with the spawn animation).
    pub start_maximized: bool,
}

impl OpenAppRequest {
    /// Creates a request with default title and size.
    pub fn new(app_id: AppId, content: AppContent) -> Self {
        Self {
            app_id,
            content,
            title: None,
            size_hint: None,
            start_maximized: false,
        }
    }

    /// Overrides the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the size-class hint.
    pub fn with_size_hint(mut self, size_class: SizeClass) -> Self {
        self.size_hint = Some(size_class);
        self
    }

    /// Marks the request to open maximized.
    pub fn maximized(mut self) -> Self {
        self.start_maximized = true;
        self
    }

    /// Resolved title.
    pub fn resolved_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.app_id.title().to_string())
    }

    /// Resolved size class.
    pub fn resolved_size_class(&self) -> SizeClass {
        self.size_hint.unwrap_or_default()
    }
}

/// Light or dark shell appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds.
    Light,
    /// Dark backgrounds.
    #[default]
    Dark,
}

impl ThemeMode {
    /// Stored string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Accent colour presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Blue accent.
    #[default]
    Blue,
    /// Purple accent.
    Purple,
    /// Green accent.
    Green,
    /// Orange accent.
    Orange,
    /// Pink accent.
    Pink,
}

impl AccentColor {
    /// Every preset in picker order.
    pub const ALL: [AccentColor; 5] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
        Self::Pink,
    ];

    /// Stored string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
        }
    }

    /// Parses a stored value; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|accent| accent.as_str() == raw.trim())
    }

    /// Picker label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
        }
    }

    /// Base accent colour.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#3b82f6",
            Self::Purple => "#a855f7",
            Self::Green => "#10b981",
            Self::Orange => "#f59e0b",
            Self::Pink => "#ec4899",
        }
    }

    /// Darker hover tone.
    pub const fn hover_hex(self) -> &'static str {
        match self {
            Self::Blue => "#2563eb",
            Self::Purple => "#9333ea",
            Self::Green => "#059669",
            Self::Orange => "#d97706",
            Self::Pink => "#db2777",
        }
    }

    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (59, 130, 246),
            Self::Purple => (168, 85, 247),
            Self::Green => (16, 185, 129),
            Self::Orange => (245, 158, 11),
            Self::Pink => (236, 72, 153),
        }
    }

    /// Translucent fill tone.
    pub fn light_rgba(self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r}, {g}, {b}, 0.2)")
    }

    /// Translucent border tone.
    pub fn border_rgba(self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({r}, {g}, {b}, 0.3)")
    }
}

/// Persisted appearance preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemePreferences {
    /// Light/dark mode.
    pub mode: ThemeMode,
    /// Accent colour preset.
    pub accent: AccentColor,
}

/// Commands an app may send to the window host.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Open (or replace the active window with) another view.
    OpenApp(OpenAppRequest),
    /// Close the active window.
    CloseWindow,
    /// Change the shell theme mode.
    SetThemeMode(ThemeMode),
    /// Change the shell accent colour.
    SetAccentColor(AccentColor),
    /// Open a link outside the shell.
    OpenExternalUrl(String),
}

#[derive(Clone, Copy)]
/// Window management service for apps.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Asks the host to open a view.
    pub fn open(&self, request: OpenAppRequest) {
        self.sender.call(AppCommand::OpenApp(request));
    }

    /// Asks the host to close the active window.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }
}

#[derive(Clone, Copy)]
/// Appearance service for apps.
pub struct ThemeService {
    sender: Callback<AppCommand>,
    /// Current appearance preferences.
    pub preferences: Signal<ThemePreferences>,
}

impl ThemeService {
    /// Current accent colour.
    pub fn accent(&self) -> AccentColor {
        self.preferences.get().accent
    }

    /// Current theme mode.
    pub fn mode(&self) -> ThemeMode {
        self.preferences.get().mode
    }

    /// Requests a theme mode change.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.sender.call(AppCommand::SetThemeMode(mode));
    }

    /// Requests an accent colour change.
    pub fn set_accent(&self, accent: AccentColor) {
        self.sender.call(AppCommand::SetAccentColor(accent));
    }
}

#[derive(Clone, Copy)]
/// External link service for apps.
pub struct LinkService {
    sender: Callback<AppCommand>,
}

impl LinkService {
    /// Opens `url` outside the shell.
    pub fn open(&self, url: impl Into<String>) {
        self.sender.call(AppCommand::OpenExternalUrl(url.into()));
    }
}

#[derive(Clone, Copy)]
/// Capability bundle available to every mounted app.
pub struct AppServices {
    /// Window management.
    pub window: WindowService,
    /// Appearance preferences.
    pub theme: ThemeService,
    /// External links.
    pub links: LinkService,
}

impl AppServices {
    /// Builds service handles around the host command callback.
    pub fn new(sender: Callback<AppCommand>, preferences: Signal<ThemePreferences>) -> Self {
        Self {
            window: WindowService { sender },
            theme: ThemeService {
                sender,
                preferences,
            },
            links: LinkService { sender },
        }
    }
}

/// Makes `services` available to app views below the current owner.
pub fn provide_app_services(services: AppServices) {
    provide_context(services);
}

/// Returns the host-provided [`AppServices`], if mounted inside the window host.
pub fn use_app_services() -> Option<AppServices> {
    use_context::<AppServices>()
}

#[cfg(test)]
mod tests {
    use leptos::IntoView;

    use super::*;

    #[test]
    fn slugs_parse_back_to_their_app() {
        for app_id in AppId::ALL {
            assert_eq!(AppId::from_slug(app_id.slug()), Some(app_id));
        }
        assert_eq!(AppId::from_slug(" Projects "), Some(AppId::Projects));
        assert_eq!(AppId::from_slug("calculator"), None);
    }

    #[test]
    fn size_classes_map_to_viewport_fractions() {
        assert_eq!(SizeClass::default(), SizeClass::Medium);
        assert_eq!(SizeClass::Small.viewport_fraction(), 0.5);
        assert_eq!(SizeClass::Medium.viewport_fraction(), 0.7);
        assert_eq!(SizeClass::Large.viewport_fraction(), 0.9);
    }

    #[test]
    fn content_equality_is_closure_identity() {
        let first = AppContent::new(AppId::About, || ().into_view());
        let clone = first.clone();
        let other = AppContent::new(AppId::About, || ().into_view());

        assert_eq!(first, clone);
        assert_ne!(first, other);
        assert_eq!(first.kind(), AppId::About);
    }

    #[test]
    fn open_request_resolves_defaults() {
        let content = AppContent::new(AppId::DinoGame, || ().into_view());
        let request = OpenAppRequest::new(AppId::DinoGame, content.clone());
        assert_eq!(request.resolved_title(), "Dino Game");
        assert_eq!(request.resolved_size_class(), SizeClass::Medium);
        assert!(!request.start_maximized);

        let request = OpenAppRequest::new(AppId::Projects, content)
            .with_title("Browser")
            .with_size_hint(SizeClass::Large)
            .maximized();
        assert_eq!(request.resolved_title(), "Browser");
        assert_eq!(request.resolved_size_class(), SizeClass::Large);
        assert!(request.start_maximized);
    }

    #[test]
    fn stored_theme_strings_parse_or_reject() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(AccentColor::parse("pink"), Some(AccentColor::Pink));
        assert_eq!(AccentColor::parse("teal"), None);
        assert_eq!(AccentColor::Blue.light_rgba(), "rgba(59, 130, 246, 0.2)");
    }
}
