//! Contact card app: profile header, one-click contact actions, and plain contact details.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::use_app_services;
use leptos::*;
use system_ui::prelude::*;

const NAME: &str = "Soumil Baldota";
const AVATAR: &str = "/soumil.png";
const EMAIL: &str = "ssb2234@columbia.edu";
const PHONE: &str = "+16463268135";
const SCHEDULE_URL: &str = "https://calendar.google.com/calendar/appointments/schedules/\
    AcZssZ2ja62H_eo2qU6_blBj5v2elCGFaQvYaJiD-JZZVbBYfZrskFWBECqqj6KcL7iokPUZsLx7_BlG?gv=true";
const LINKEDIN_URL: &str = "https://linkedin.com/in/soumilbaldota/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactAction {
    Email,
    Schedule,
    Call,
    Text,
    LinkedIn,
}

impl ContactAction {
    const ALL: [ContactAction; 5] = [
        Self::Email,
        Self::Schedule,
        Self::Call,
        Self::Text,
        Self::LinkedIn,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Schedule => "schedule",
            Self::Call => "call",
            Self::Text => "text",
            Self::LinkedIn => "linkedin",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Email => IconName::Mail,
            Self::Schedule => IconName::Calendar,
            Self::Call => IconName::Phone,
            Self::Text => IconName::Message,
            Self::LinkedIn => IconName::Link,
        }
    }

    fn url(self) -> String {
        match self {
            Self::Email => format!("mailto:{EMAIL}"),
            Self::Schedule => SCHEDULE_URL.to_string(),
            Self::Call => format!("tel:{PHONE}"),
            Self::Text => format!("sms:{PHONE}"),
            Self::LinkedIn => LINKEDIN_URL.to_string(),
        }
    }
}

#[component]
fn Avatar(size_token: &'static str) -> impl IntoView {
    view! {
        <img class="contact-avatar" data-ui-size=size_token src=AVATAR alt=format!("{NAME} avatar") />
    }
}

#[component]
fn ActionButton(action: ContactAction) -> impl IntoView {
    let services = use_app_services();

    view! {
        <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
            <Button
                variant=ButtonVariant::Primary
                ui_slot="contact-action"
                aria_label=action.label()
                on_click=Callback::new(move |_| match services {
                    Some(services) => services.links.open(action.url()),
                    None => logging::warn!("no link service for contact action `{}`", action.label()),
                })
            >
                <Icon icon=action.icon() />
            </Button>
            <Text role=TextRole::Caption>{action.label()}</Text>
        </Stack>
    }
}

#[component]
/// Contact card with quick actions.
pub fn ContactApp() -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::None align=LayoutAlign::Stretch layout_class="contact-app">
            <Panel variant=SurfaceVariant::Muted elevation=Elevation::Flat ui_slot="sidebar">
                <Cluster gap=LayoutGap::Sm>
                    <Avatar size_token="sm" />
                    <Text role=TextRole::Label>{NAME}</Text>
                </Cluster>
            </Panel>
            <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg align=LayoutAlign::Center ui_slot="content">
                <Cluster gap=LayoutGap::Lg>
                    <Avatar size_token="lg" />
                    <Heading>{NAME}</Heading>
                </Cluster>
                <Cluster gap=LayoutGap::Md>
                    {ContactAction::ALL
                        .into_iter()
                        .map(|action| view! { <ActionButton action /> })
                        .collect_view()}
                </Cluster>
                <dl class="contact-details">
                    <dt>"Email"</dt>
                    <dd>{EMAIL}</dd>
                    <dt>"Phone"</dt>
                    <dd>{PHONE}</dd>
                </dl>
            </Stack>
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn actions_map_to_their_link_schemes() {
        let urls: Vec<_> = ContactAction::ALL.into_iter().map(ContactAction::url).collect();
        assert_eq!(urls[0], "mailto:ssb2234@columbia.edu");
        assert!(urls[1].starts_with("https://calendar.google.com/"));
        assert!(urls[1].ends_with("?gv=true"));
        assert_eq!(urls[2], "tel:+16463268135");
        assert_eq!(urls[3], "sms:+16463268135");
        assert_eq!(urls[4], "https://linkedin.com/in/soumilbaldota/");
    }

    #[test]
    fn action_labels_are_lowercase_words() {
        let labels: Vec<_> = ContactAction::ALL.into_iter().map(ContactAction::label).collect();
        assert_eq!(labels, vec!["email", "schedule", "call", "text", "linkedin"]);
    }
}
