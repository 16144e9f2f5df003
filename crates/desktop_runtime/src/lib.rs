//! Window host runtime for the portfolio desktop.
//!
//! The crate holds the single-active-app session reducer, DOM-free window geometry and gesture
//! state machines, scoped lifecycle helpers, the theme store, the manifest-driven app catalog, and
//! the Leptos shell components that wire them to the browser.

pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod lifecycle;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod theme;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use lifecycle::{DisposalToken, ListenerLease, ListenerLedger, ScopedTimeout};
pub use model::*;
pub use persistence::{load_theme_preferences, persist_theme_preferences};
pub use reducer::{reduce_session, RuntimeEffect, SessionAction, SessionError};
pub use theme::{ThemeError, ThemeStore, ThemeSubscription};
pub use window_manager::{BackdropDismissGuard, GestureFrame, WindowController, WindowFrameState};
