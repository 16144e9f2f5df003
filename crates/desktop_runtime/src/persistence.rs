//! Appearance preference persistence through the injected [`PrefsStore`].
//!
//! Two flat keys hold plain strings so the values stay readable in browser devtools.

use desktop_app_contract::{AccentColor, ThemeMode, ThemePreferences};
use platform_host::PrefsStore;

use crate::theme::ThemeError;

/// Key holding `light` or `dark`.
pub const THEME_KEY: &str = "theme";
/// Key holding the accent preset name.
pub const ACCENT_KEY: &str = "accentColor";

/// Builds preferences from raw stored values, falling back to defaults for missing or unknown
/// entries.
pub fn parse_theme_preferences(mode: Option<&str>, accent: Option<&str>) -> ThemePreferences {
    ThemePreferences {
        mode: mode.and_then(ThemeMode::parse).unwrap_or_default(),
        accent: accent.and_then(AccentColor::parse).unwrap_or_default(),
    }
}

/// Loads the stored appearance preferences.
///
/// # Errors
///
/// Returns [`ThemeError::Load`] when the store fails to read either key.
pub async fn load_theme_preferences<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<ThemePreferences, ThemeError> {
    let mode = store
        .load_pref(THEME_KEY)
        .await
        .map_err(|source| ThemeError::Load {
            key: THEME_KEY,
            source,
        })?;
    let accent = store
        .load_pref(ACCENT_KEY)
        .await
        .map_err(|source| ThemeError::Load {
            key: ACCENT_KEY,
            source,
        })?;
    Ok(parse_theme_preferences(mode.as_deref(), accent.as_deref()))
}

/// Writes both appearance keys.
///
/// # Errors
///
/// Returns [`ThemeError::Persist`] for the first key the store fails to write.
pub async fn persist_theme_preferences<S: PrefsStore + ?Sized>(
    store: &S,
    preferences: ThemePreferences,
) -> Result<(), ThemeError> {
    store
        .save_pref(THEME_KEY, preferences.mode.as_str())
        .await
        .map_err(|source| ThemeError::Persist {
            key: THEME_KEY,
            source,
        })?;
    store
        .save_pref(ACCENT_KEY, preferences.accent.as_str())
        .await
        .map_err(|source| ThemeError::Persist {
            key: ACCENT_KEY,
            source,
        })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_or_missing_values_fall_back_to_defaults() {
        assert_eq!(parse_theme_preferences(None, None), ThemePreferences::default());
        assert_eq!(
            parse_theme_preferences(Some("neon"), Some("orange")),
            ThemePreferences {
                mode: ThemeMode::Dark,
                accent: AccentColor::Orange,
            }
        );
    }

    #[test]
    fn preferences_are_stored_as_plain_strings() {
        let store = MemoryPrefsStore::default();
        let preferences = ThemePreferences {
            mode: ThemeMode::Light,
            accent: AccentColor::Purple,
        };

        block_on(persist_theme_preferences(&store, preferences)).expect("persist");

        assert_eq!(store.peek(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.peek(ACCENT_KEY).as_deref(), Some("purple"));
        assert_eq!(
            block_on(load_theme_preferences(&store)).expect("load"),
            preferences
        );
    }
}
