//! About Me app: a short and a full biography rendered from structured sections.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Numbered(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Section {
    heading: Option<&'static str>,
    blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Story {
    title: &'static str,
    sections: &'static [Section],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StoryLength {
    #[default]
    Short,
    Full,
}

impl StoryLength {
    const ALL: [StoryLength; 2] = [Self::Short, Self::Full];

    fn label(self) -> &'static str {
        match self {
            Self::Short => "TLDR",
            Self::Full => "Full Story",
        }
    }

    fn story(self) -> &'static Story {
        match self {
            Self::Short => &SHORT_STORY,
            Self::Full => &FULL_STORY,
        }
    }
}

const SHORT_STORY: Story = Story {
    title: "About Me (TLDR)",
    sections: &[Section {
        heading: None,
        blocks: &[
            Block::Paragraph(
                "I am a computer science graduate student at Columbia University with a focus on \
                 systems, operating systems, and scalable infrastructure. I enjoy working close to \
                 the metal and understanding how kernels behave, how networks fail, and how \
                 systems can be made more efficient and reliable.",
            ),
            Block::Paragraph(
                "I have worked across research, industry, and open source environments, from SLAM \
                 systems on a Mars Rover team to distributed scientific computing at CERN.",
            ),
            Block::Paragraph(
                "Currently, I am focused on deepening my systems expertise, building robust \
                 software, and improving through disciplined, consistent work.",
            ),
        ],
    }],
};

const FULL_STORY: Story = Story {
    title: "About Me (Full Story)",
    sections: &[
        Section {
            heading: Some("Early Interest in Computing"),
            blocks: &[
                Block::Paragraph(
                    "I have been drawn to computing since childhood, not just using technology but \
                     understanding how it works internally. Early on, I spent time dismantling and \
                     reassembling computer hardware and experimenting with operating systems, \
                     which led me toward systems level thinking.",
                ),
                Block::Paragraph(
                    "This curiosity shaped my academic path. I completed my undergraduate degree \
                     in computer science with a GPA of 9.56 out of 10 and received the Dean's \
                     Scholarship for academic excellence, gravitating toward Operating Systems, \
                     Design and Analysis of Algorithms, and Digital Image Processing.",
                ),
            ],
        },
        Section {
            heading: Some("Applied Systems Research"),
            blocks: &[
                Block::Paragraph(
                    "As part of the Rudra Mars Rover Team, I led the development of SLAM \
                     algorithms under real world constraints where reliability, performance, and \
                     rapid debugging were critical.",
                ),
                Block::Paragraph(
                    "During an international competition, I helped diagnose and resolve a motor \
                     overheating issue mid run. Our team placed fourth at the International Rover \
                     Design Challenge, and I later mentored new team members.",
                ),
            ],
        },
        Section {
            heading: Some("Professional Experience"),
            blocks: &[
                Block::Bullets(&[
                    "Google Summer of Code 2022 at CERN: a high performance code generation \
                     interface for scientific computing.",
                    "Samsung Research: led a small team designing a multi modal machine learning \
                     model.",
                    "Maximl Labs: resource leveling and optimization strategies for enterprise \
                     operations.",
                ]),
                Block::Paragraph(
                    "Exploring cybersecurity, including identifying vulnerabilities in ISP \
                     networks, has shaped how I think about robustness and system security.",
                ),
            ],
        },
        Section {
            heading: Some("Graduate Studies at Columbia"),
            blocks: &[
                Block::Paragraph(
                    "I am pursuing a Master of Science in Computer Science at Columbia University. \
                     Completed coursework includes:",
                ),
                Block::Bullets(&[
                    "Operating Systems",
                    "Computer Networks",
                    "Natural Language Processing",
                    "Programming for Problem Solving",
                ]),
            ],
        },
        Section {
            heading: Some("Current Goals"),
            blocks: &[
                Block::Numbered(&[
                    "Strengthen my fundamentals in systems, competitive programming, and system \
                     design",
                    "Contribute meaningful research or open source work",
                    "Build software that is efficient, secure, and reliable",
                ]),
                Block::Paragraph(
                    "I believe in steady progress through consistent effort. There is always more \
                     to understand in computing systems.",
                ),
            ],
        },
    ],
};

fn render_block(block: Block) -> View {
    match block {
        Block::Paragraph(text) => view! { <Text>{text}</Text> }.into_view(),
        Block::Bullets(items) => view! {
            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
        }
        .into_view(),
        Block::Numbered(items) => view! {
            <ol>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ol>
        }
        .into_view(),
    }
}

fn render_story(story: &'static Story) -> View {
    view! {
        <Stack gap=LayoutGap::Md>
            <Heading role=TextRole::Display>{story.title}</Heading>
            {story
                .sections
                .iter()
                .map(|section| {
                    view! {
                        <Stack gap=LayoutGap::Sm>
                            {section
                                .heading
                                .map(|heading| view! { <Heading>{heading}</Heading> })}
                            {section.blocks.iter().copied().map(render_block).collect_view()}
                        </Stack>
                    }
                })
                .collect_view()}
        </Stack>
    }
    .into_view()
}

#[component]
/// Biography viewer with a collapsible sidebar switching between the short and full story.
pub fn AboutApp() -> impl IntoView {
    let selected = create_rw_signal(StoryLength::default());
    let collapsed = create_rw_signal(false);

    view! {
        <Cluster gap=LayoutGap::None align=LayoutAlign::Stretch layout_class="about-app">
            <Panel variant=SurfaceVariant::Muted elevation=Elevation::Flat ui_slot="sidebar">
                <Stack gap=LayoutGap::Sm>
                    <Cluster justify=LayoutJustify::Between>
                        <Show when=move || !collapsed.get()>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>"About Me"</Text>
                        </Show>
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            aria_label=Signal::derive(move || {
                                let label = if collapsed.get() {
                                    "Expand sidebar"
                                } else {
                                    "Collapse sidebar"
                                };
                                label.to_string()
                            })
                            on_click=Callback::new(move |_| collapsed.update(|value| *value = !*value))
                        >
                            {move || {
                                let icon = if collapsed.get() {
                                    IconName::ChevronRight
                                } else {
                                    IconName::ChevronDown
                                };
                                view! { <Icon icon size=IconSize::Sm /> }
                            }}
                        </Button>
                    </Cluster>
                    {StoryLength::ALL
                        .into_iter()
                        .map(|length| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    title=length.label()
                                    selected=Signal::derive(move || selected.get() == length)
                                    on_click=Callback::new(move |_| selected.set(length))
                                >
                                    {move || {
                                        if collapsed.get() {
                                            length.label()[..1].to_string()
                                        } else {
                                            length.label().to_string()
                                        }
                                    }}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>
            <Panel padding=LayoutPadding::Lg ui_slot="content">
                {move || render_story(selected.get().story())}
            </Panel>
        </Cluster>
    }
}
