//! Work experience app: a timeline of companies with collapsible role details.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::collections::BTreeSet;

use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Role {
    title: &'static str,
    duration: &'static str,
    highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Company {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    logos: &'static [&'static str],
    roles: &'static [Role],
}

const COMPANIES: [Company; 3] = [
    Company {
        id: "maximl",
        name: "Maximl Labs",
        location: "Bangalore, India",
        logos: &["/logos/maximl.png"],
        roles: &[
            Role {
                title: "Software Engineer",
                duration: "Jun 2024 - Jul 2025",
                highlights: &[
                    "Led design and rollout of a Redis-based background job framework, \
                     coordinating adoption across multiple backend teams.",
                    "Translated product requirements into scalable backend APIs, identifying edge \
                     cases and failure modes early in the design process.",
                    "Strengthened reliability with observability and CI/CD automation, lowering \
                     incident resolution from 2h to 30m and deployment time by 80%.",
                    "Implemented multi-tenancy using Row-Level Security policies for secure tenant \
                     data isolation.",
                ],
            },
            Role {
                title: "Software Engineering Intern",
                duration: "Jun 2023 - Jun 2024",
                highlights: &[
                    "Refined schemas, constraints, and indexes for 3x faster query execution on \
                     core APIs, adding a Redis cache to avoid recomputation.",
                    "Introduced strict type checking and expanded E2E tests, raising coverage from \
                     40% to 90%.",
                    "Owned backend reliability improvements across schema, indexing, and caching.",
                ],
            },
        ],
    },
    Company {
        id: "samsung",
        name: "Samsung Research",
        location: "Bangalore, India",
        logos: &["/logos/samsung.png", "/logos/prism.png"],
        roles: &[Role {
            title: "Software Engineering Intern",
            duration: "Nov 2022 - Jun 2023",
            highlights: &[
                "Scraped 50k+ text samples across diverse domains and augmented them with BERT \
                 into 120k+ training samples.",
                "Developed a multi-modal benchmark model for document classification on \
                 low-powered mobile devices at 95% validation accuracy.",
            ],
        }],
    },
    Company {
        id: "cern",
        name: "CERN, Google Summer of Code",
        location: "Mountain View, CA",
        logos: &["/logos/hsf.png", "/logos/gsoc.png", "/logos/cern.png"],
        roles: &[Role {
            title: "Software Contributor",
            duration: "Jun 2022 - Sep 2022",
            highlights: &[
                "Owned the Julia bindings workstream under GSoC mentorship with weekly design \
                 reviews.",
                "Refactored generator code and benchmarked the C++ and Julia interfaces.",
            ],
        }],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Which companies are expanded and which role is open inside each.
struct TimelineState {
    expanded: BTreeSet<&'static str>,
    open_roles: Vec<(&'static str, usize)>,
}

impl TimelineState {
    fn new(companies: &[Company]) -> Self {
        Self {
            expanded: companies.first().map(|company| company.id).into_iter().collect(),
            open_roles: Vec::new(),
        }
    }

    fn is_expanded(&self, company_id: &str) -> bool {
        self.expanded.contains(company_id)
    }

    fn toggle_company(&mut self, company_id: &'static str) {
        if !self.expanded.remove(company_id) {
            self.expanded.insert(company_id);
        }
    }

    fn open_role(&self, company_id: &str) -> Option<usize> {
        self.open_roles
            .iter()
            .find(|(id, _)| *id == company_id)
            .map(|(_, index)| *index)
    }

    /// Opens `index` in `company_id`, closing it if it was already open.
    fn toggle_role(&mut self, company_id: &'static str, index: usize) {
        let previous = self.open_role(company_id);
        self.open_roles.retain(|(id, _)| *id != company_id);
        if previous != Some(index) {
            self.open_roles.push((company_id, index));
        }
    }
}

/// Brings the back logo of the deck to the front.
fn rotate_logos(deck: &mut [&'static str]) {
    if deck.len() > 1 {
        deck.rotate_right(1);
    }
}

#[component]
fn LogoDeck(logos: &'static [&'static str]) -> impl IntoView {
    let deck = create_rw_signal(logos.to_vec());
    let interactive = logos.len() > 1;

    view! {
        <div
            class="work-logo-deck"
            data-ui-slot="logo-deck"
            data-ui-interactive=interactive
            on:click=move |_| deck.update(|deck| rotate_logos(deck))
        >
            {move || {
                let deck = deck.get();
                let depth = deck.len();
                deck.into_iter()
                    .enumerate()
                    .map(|(index, logo)| {
                        view! {
                            <img
                                src=logo
                                alt="company logo"
                                style=format!(
                                    "transform:translate({}px, {}px);z-index:{};",
                                    index * 6,
                                    -(index as i32) * 6,
                                    depth - index
                                )
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn CompanyEntry(company: Company, state: RwSignal<TimelineState>) -> impl IntoView {
    let company_id = company.id;
    let expanded = Signal::derive(move || state.with(|state| state.is_expanded(company_id)));

    view! {
        <Card ui_slot="timeline-entry" selected=expanded>
            <Cluster gap=LayoutGap::Lg align=LayoutAlign::Start>
                <LogoDeck logos=company.logos />
                <Stack gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Quiet
                        aria_expanded=expanded
                        trailing_icon=IconName::ChevronDown
                        on_click=Callback::new(move |_| {
                            state.update(|state| state.toggle_company(company_id))
                        })
                    >
                        <Heading>{company.name}</Heading>
                    </Button>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{company.location}</Text>
                    <Show when=move || expanded.get()>
                        {company
                            .roles
                            .iter()
                            .enumerate()
                            .map(|(index, role)| {
                                let role = *role;
                                let open = Signal::derive(move || {
                                    state.with(|state| state.open_role(company_id) == Some(index))
                                });
                                view! {
                                    <Panel variant=SurfaceVariant::Muted padding=LayoutPadding::Sm>
                                        <Button
                                            variant=ButtonVariant::Quiet
                                            aria_expanded=open
                                            on_click=Callback::new(move |_| {
                                                state.update(|state| state.toggle_role(company_id, index))
                                            })
                                        >
                                            <Stack gap=LayoutGap::None>
                                                <Text role=TextRole::Label>{role.title}</Text>
                                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                                    {role.duration}
                                                </Text>
                                            </Stack>
                                        </Button>
                                        <Show when=move || open.get()>
                                            <ul>
                                                {role
                                                    .highlights
                                                    .iter()
                                                    .map(|line| view! { <li>{*line}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </Show>
                                    </Panel>
                                }
                            })
                            .collect_view()}
                    </Show>
                </Stack>
            </Cluster>
        </Card>
    }
}

#[component]
/// Work experience timeline.
pub fn WorkApp() -> impl IntoView {
    let state = create_rw_signal(TimelineState::new(&COMPANIES));

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg layout_class="work-app">
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Display>"Work Experience"</Heading>
                <Text tone=TextTone::Secondary>"Click on a role to see more details"</Text>
            </Stack>
            <ol class="work-timeline">
                {COMPANIES
                    .into_iter()
                    .map(|company| view! { <li><CompanyEntry company state /></li> })
                    .collect_view()}
            </ol>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_company_starts_expanded() {
        let state = TimelineState::new(&COMPANIES);
        assert!(state.is_expanded("maximl"));
        assert!(!state.is_expanded("samsung"));
        assert!(!state.is_expanded("cern"));
    }

    #[test]
    fn companies_toggle_independently() {
        let mut state = TimelineState::new(&COMPANIES);
        state.toggle_company("cern");
        state.toggle_company("maximl");
        assert!(state.is_expanded("cern"));
        assert!(!state.is_expanded("maximl"));
        state.toggle_company("maximl");
        assert!(state.is_expanded("maximl"));
    }

    #[test]
    fn one_role_open_per_company() {
        let mut state = TimelineState::new(&COMPANIES);
        state.toggle_role("maximl", 0);
        state.toggle_role("samsung", 0);
        state.toggle_role("maximl", 1);
        assert_eq!(state.open_role("maximl"), Some(1));
        assert_eq!(state.open_role("samsung"), Some(0));

        state.toggle_role("maximl", 1);
        assert_eq!(state.open_role("maximl"), None);
    }

    #[test]
    fn logo_deck_rotates_back_card_to_front() {
        let mut deck = vec!["hsf", "gsoc", "cern"];
        rotate_logos(&mut deck);
        assert_eq!(deck, vec!["cern", "hsf", "gsoc"]);

        let mut single = vec!["maximl"];
        rotate_logos(&mut single);
        assert_eq!(single, vec!["maximl"]);
    }
}
