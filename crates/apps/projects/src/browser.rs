use leptos::*;
use system_ui::prelude::*;

use crate::catalog::Project;

#[component]
fn BrowserChrome(address: String) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Sm layout_class="project-browser-chrome">
            <Button variant=ButtonVariant::Quiet size=ButtonSize::Sm aria_label="Back" disabled=true>
                <Icon icon=IconName::ChevronLeft size=IconSize::Sm />
            </Button>
            <Button variant=ButtonVariant::Quiet size=ButtonSize::Sm aria_label="Forward" disabled=true>
                <Icon icon=IconName::ChevronRight size=IconSize::Sm />
            </Button>
            <output class="project-browser-address" data-ui-slot="address-bar">
                {address}
            </output>
            <Icon icon=IconName::Globe size=IconSize::Sm />
        </Cluster>
    }
}

#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let services = desktop_app_contract::use_app_services();

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg ui_slot="details">
            <Stack gap=LayoutGap::Sm>
                <Heading>{project.name}</Heading>
                <Text tone=TextTone::Secondary>{project.description}</Text>
            </Stack>
            <Stack gap=LayoutGap::Sm>
                <Text role=TextRole::Caption tone=TextTone::Secondary>"Technologies"</Text>
                <Cluster gap=LayoutGap::Sm>
                    {project
                        .languages
                        .iter()
                        .map(|language| view! { <Badge tone=TextTone::Accent>{*language}</Badge> })
                        .collect_view()}
                </Cluster>
            </Stack>
            <Stack gap=LayoutGap::Sm>
                <Text role=TextRole::Caption tone=TextTone::Secondary>"README"</Text>
                <Panel variant=SurfaceVariant::Muted elevation=Elevation::Flat>
                    <pre class="project-readme">{project.readme}</pre>
                </Panel>
            </Stack>
            {project.repository_url.map(|url| {
                view! {
                    <Button
                        leading_icon=IconName::ExternalLink
                        on_click=Callback::new(move |_| {
                            if let Some(services) = services {
                                services.links.open(url);
                            }
                        })
                    >
                        "View on GitHub"
                    </Button>
                }
            })}
        </Stack>
    }
}

#[component]
/// Browser-style detail view for one project, opened as its own window session.
pub fn ProjectBrowser(project: Project) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::None layout_class="project-browser">
            <BrowserChrome address=project.address() />
            <Cluster gap=LayoutGap::None align=LayoutAlign::Stretch>
                <iframe
                    class="project-browser-video"
                    src=project.video_url
                    title=project.name
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
                <ProjectDetails project />
            </Cluster>
        </Stack>
    }
}
