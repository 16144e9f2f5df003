//! Projects app: a categorised gallery with quick-look previews, a carousel, and a project
//! browser that opens in its own maximized window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod browser;
pub mod catalog;

use desktop_app_contract::{use_app_services, AppContent, AppId, OpenAppRequest, SizeClass};
use leptos::*;
use system_ui::prelude::*;

pub use browser::ProjectBrowser;
use catalog::{filter_projects, group_by_category, Carousel, Category, CategoryFilter, Project, PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    QuickLook(Project),
    Carousel(Carousel),
}

/// Window request that shows `project` in the project browser.
pub fn project_browser_request(project: Project) -> OpenAppRequest {
    OpenAppRequest::new(
        AppId::Projects,
        AppContent::new(AppId::Projects, move || {
            view! { <ProjectBrowser project /> }.into_view()
        }),
    )
    .with_title(project.name)
    .with_size_hint(SizeClass::Large)
    .maximized()
}

fn carousel_for(project: &Project) -> Option<Carousel> {
    let index = PROJECTS.iter().position(|entry| entry.id == project.id)?;
    Carousel::new(index, PROJECTS.len())
}

#[component]
fn ProjectThumbnail(project: Project, overlay: RwSignal<Option<Overlay>>) -> impl IntoView {
    let services = use_app_services();

    view! {
        <Card
            ui_slot="project-thumbnail"
            on_click=Callback::new(move |_| overlay.set(Some(Overlay::QuickLook(project))))
            on_dblclick=Callback::new(move |_| match services {
                Some(services) => services.window.open(project_browser_request(project)),
                None => logging::warn!("project browser needs the window host"),
            })
        >
            <img src=project.thumbnail alt=project.name />
            <Icon icon=IconName::Folder size=IconSize::Sm />
            <Text role=TextRole::Caption>{project.name}</Text>
        </Card>
    }
}

#[component]
fn VideoEmbed(url: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <iframe
            class="project-video"
            src=url
            title=title
            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
            allowfullscreen=true
        ></iframe>
    }
}

#[component]
fn OverlayView(overlay: RwSignal<Option<Overlay>>) -> impl IntoView {
    let close = Callback::new(move |_| overlay.set(None));

    move || {
        let current = overlay.get()?;
        let view = match current {
            Overlay::QuickLook(project) => view! {
                <Panel elevation=Elevation::Overlay ui_slot="quick-look" aria_label=project.name>
                    <Cluster justify=LayoutJustify::Between>
                        <Cluster gap=LayoutGap::Sm>
                            <Button variant=ButtonVariant::Quiet size=ButtonSize::Sm aria_label="Close preview" on_click=close>
                                "Close"
                            </Button>
                            <Button
                                variant=ButtonVariant::Quiet
                                size=ButtonSize::Sm
                                aria_label="Open in carousel view"
                                on_click=Callback::new(move |_| {
                                    overlay.set(carousel_for(&project).map(Overlay::Carousel));
                                })
                            >
                                "Carousel"
                            </Button>
                        </Cluster>
                        <Text role=TextRole::Label>{project.name}</Text>
                    </Cluster>
                    <VideoEmbed url=project.video_url title=project.name />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {format!("Category: {}", project.category.label())}
                    </Text>
                </Panel>
            }
            .into_view(),
            Overlay::Carousel(carousel) => {
                let project = PROJECTS[carousel.index()];
                let step = move |next: Carousel| overlay.set(Some(Overlay::Carousel(next)));
                view! {
                    <Panel elevation=Elevation::Overlay ui_slot="carousel" aria_label=project.name>
                        <Cluster justify=LayoutJustify::Between>
                            <Button variant=ButtonVariant::Quiet size=ButtonSize::Sm aria_label="Close carousel" on_click=close>
                                "Close"
                            </Button>
                            <Text role=TextRole::Label>
                                {format!("{} ({})", project.name, carousel.caption())}
                            </Text>
                        </Cluster>
                        <VideoEmbed url=project.video_url title=project.name />
                        <Cluster justify=LayoutJustify::Between>
                            <Button
                                variant=ButtonVariant::Primary
                                leading_icon=IconName::ChevronLeft
                                on_click=Callback::new(move |_| step(carousel.previous()))
                            >
                                "Previous"
                            </Button>
                            <Stack gap=LayoutGap::None align=LayoutAlign::Center>
                                <Text>{project.name}</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {project.category.label()}
                                </Text>
                            </Stack>
                            <Button
                                variant=ButtonVariant::Primary
                                trailing_icon=IconName::ChevronRight
                                on_click=Callback::new(move |_| step(carousel.next()))
                            >
                                "Next"
                            </Button>
                        </Cluster>
                    </Panel>
                }
                .into_view()
            }
        };
        Some(view)
    }
}

#[component]
/// Project gallery grouped by category.
pub fn ProjectsApp() -> impl IntoView {
    let filter = create_rw_signal(CategoryFilter::All);
    let query = create_rw_signal(String::new());
    let overlay = create_rw_signal(None::<Overlay>);

    let filters = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .map(|option| {
            view! {
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    selected=Signal::derive(move || filter.get() == option)
                    on_click=Callback::new(move |_| filter.set(option))
                >
                    {option.label()}
                </Button>
            }
        })
        .collect_view();

    let groups = move || {
        let needle = query.get();
        let matches = filter_projects(&PROJECTS, filter.get(), &needle);
        if matches.is_empty() {
            return view! { <EmptyState>"No projects match your search."</EmptyState> }.into_view();
        }
        group_by_category(&matches)
            .into_iter()
            .map(|(category, members)| {
                let count = members.len();
                view! {
                    <Panel variant=SurfaceVariant::Muted ui_slot="category" aria_label=category.label()>
                        <Cluster gap=LayoutGap::Sm>
                            <Heading role=TextRole::Label>{category.label()}</Heading>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {format!("({count} items)")}
                            </Text>
                        </Cluster>
                        <Grid gap=LayoutGap::Sm>
                            {members
                                .into_iter()
                                .map(|project| view! { <ProjectThumbnail project=*project overlay /> })
                                .collect_view()}
                        </Grid>
                    </Panel>
                }
            })
            .collect_view()
    };

    view! {
        <Stack gap=LayoutGap::Md padding=LayoutPadding::Md layout_class="projects-app">
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                <Cluster gap=LayoutGap::Sm>{filters}</Cluster>
                <TextField
                    value=query
                    placeholder="Search projects"
                    aria_label="Search projects"
                    leading_icon=IconName::Search
                />
            </Cluster>
            <Stack gap=LayoutGap::Lg>{groups}</Stack>
            <OverlayView overlay />
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn browser_request_opens_large_and_maximized() {
        let request = project_browser_request(PROJECTS[3]);
        assert_eq!(request.app_id, AppId::Projects);
        assert_eq!(request.resolved_title(), "Fitness Tracker App");
        assert_eq!(request.resolved_size_class(), SizeClass::Large);
        assert!(request.start_maximized);
        assert_eq!(request.content.kind(), AppId::Projects);
    }

    #[test]
    fn carousel_starts_at_the_previewed_project() {
        let carousel = carousel_for(&PROJECTS[9]).expect("known project");
        assert_eq!(carousel.index(), 9);
        assert_eq!(carousel.caption(), "10 of 18");
    }
}
