//! Glyph-backed icon set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to the shell and apps.
pub enum IconName {
    /// Person silhouette.
    User,
    /// Briefcase.
    Briefcase,
    /// Folder.
    Folder,
    /// Envelope.
    Mail,
    /// Gear.
    Settings,
    /// Bird.
    Bird,
    /// Dinosaur.
    Dinosaur,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Down chevron.
    ChevronDown,
    /// Magnifier.
    Search,
    /// Outbound link arrow.
    ExternalLink,
    /// Globe.
    Globe,
    /// Sun.
    Sun,
    /// Moon.
    Moon,
    /// Check mark.
    Check,
    /// Calendar page.
    Calendar,
    /// Telephone handset.
    Phone,
    /// Speech bubble.
    Message,
    /// Chain link.
    Link,
}

impl IconName {
    /// Resolves an icon from a manifest token.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "user" => Self::User,
            "briefcase" => Self::Briefcase,
            "folder" => Self::Folder,
            "mail" => Self::Mail,
            "settings" => Self::Settings,
            "bird" => Self::Bird,
            "dinosaur" => Self::Dinosaur,
            "globe" => Self::Globe,
            _ => return None,
        })
    }

    /// Unicode glyph rendered for the icon.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::User => "\u{1F464}",
            Self::Briefcase => "\u{1F4BC}",
            Self::Folder => "\u{1F4C1}",
            Self::Mail => "\u{2709}",
            Self::Settings => "\u{2699}",
            Self::Bird => "\u{1F426}",
            Self::Dinosaur => "\u{1F996}",
            Self::ChevronLeft => "\u{2039}",
            Self::ChevronRight => "\u{203A}",
            Self::ChevronDown => "\u{2304}",
            Self::Search => "\u{1F50D}",
            Self::ExternalLink => "\u{2197}",
            Self::Globe => "\u{1F310}",
            Self::Sun => "\u{2600}",
            Self::Moon => "\u{263E}",
            Self::Check => "\u{2713}",
            Self::Calendar => "\u{1F4C5}",
            Self::Phone => "\u{260E}",
            Self::Message => "\u{1F4AC}",
            Self::Link => "\u{1F517}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with text.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Launcher tile size.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_tokens_resolve_to_icons() {
        assert_eq!(IconName::from_token("bird"), Some(IconName::Bird));
        assert_eq!(IconName::from_token("terminal"), None);
    }
}
