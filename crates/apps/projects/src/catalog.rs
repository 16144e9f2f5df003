//! Project catalog plus the pure filtering, grouping, and carousel logic behind the gallery.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Gallery section.
pub enum Category {
    /// Web applications.
    WebDevelopment,
    /// Mobile applications.
    MobileDevelopment,
    /// Machine learning work.
    MachineLearning,
    /// Data science work.
    DataScience,
    /// Infrastructure and delivery.
    DevOps,
    /// Interface design.
    UiUx,
}

impl Category {
    /// Every category in catalog order.
    pub const ALL: [Category; 6] = [
        Self::WebDevelopment,
        Self::MobileDevelopment,
        Self::MachineLearning,
        Self::DataScience,
        Self::DevOps,
        Self::UiUx,
    ];

    /// Section heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileDevelopment => "Mobile Development",
            Self::MachineLearning => "Machine Learning",
            Self::DataScience => "Data Science",
            Self::DevOps => "DevOps",
            Self::UiUx => "UI/UX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One gallery entry.
pub struct Project {
    /// Stable id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Gallery section.
    pub category: Category,
    /// Thumbnail image path.
    pub thumbnail: &'static str,
    /// Embeddable demo video.
    pub video_url: &'static str,
    /// One-paragraph summary.
    pub description: &'static str,
    /// README excerpt shown in the browser sidebar.
    pub readme: &'static str,
    /// Technologies used.
    pub languages: &'static [&'static str],
    /// Source repository, when public.
    pub repository_url: Option<&'static str>,
}

impl Project {
    /// URL-safe form of the name.
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Address shown in the project browser's location bar.
    pub fn address(&self) -> String {
        match self.repository_url {
            Some(url) => url.to_string(),
            None => format!("https://projects.portfolio/{}", self.slug()),
        }
    }
}

const THUMBNAIL: &str = "/projects.png";
const DEMO_VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

macro_rules! project {
    ($id:literal, $name:literal, $category:ident, $description:literal, $readme:literal, [$($lang:literal),* $(,)?]) => {
        Project {
            id: $id,
            name: $name,
            category: Category::$category,
            thumbnail: THUMBNAIL,
            video_url: DEMO_VIDEO,
            description: $description,
            readme: $readme,
            languages: &[$($lang),*],
            repository_url: None,
        }
    };
}

/// Every project in display order.
pub const PROJECTS: [Project; 18] = [
    project!(
        "1",
        "E-commerce Platform",
        WebDevelopment,
        "A storefront with catalog search, cart, and checkout backed by a payments sandbox.",
        "Run `npm install` then `npm run dev`. Configure the payment keys in `.env`.",
        ["TypeScript", "React", "PostgreSQL"]
    ),
    project!(
        "2",
        "Real-time Chat App",
        WebDevelopment,
        "Rooms, presence, and typing indicators over WebSockets.",
        "Start the socket server first, then the web client.",
        ["TypeScript", "Node.js", "Redis"]
    ),
    project!(
        "3",
        "Task Management System",
        WebDevelopment,
        "Kanban boards with drag-and-drop, labels, and due-date reminders.",
        "Seed demo data with `make seed`.",
        ["Python", "Django", "React"]
    ),
    project!(
        "4",
        "Fitness Tracker App",
        MobileDevelopment,
        "Workout logging with weekly progress charts and streaks.",
        "Open the project in Android Studio and run on an emulator.",
        ["Kotlin", "Jetpack Compose"]
    ),
    project!(
        "5",
        "Food Delivery App",
        MobileDevelopment,
        "Restaurant browsing, order tracking, and push notifications.",
        "Requires a maps API key in `local.properties`.",
        ["Dart", "Flutter", "Firebase"]
    ),
    project!(
        "6",
        "Social Media App",
        MobileDevelopment,
        "Photo feed with follows, likes, and threaded comments.",
        "Build with Xcode 15 or later.",
        ["Swift", "SwiftUI"]
    ),
    project!(
        "7",
        "Image Recognition",
        MachineLearning,
        "A convolutional classifier fine-tuned on a custom labelled dataset.",
        "Download the dataset, then run `python train.py --epochs 20`.",
        ["Python", "PyTorch"]
    ),
    project!(
        "8",
        "Natural Language Processing",
        MachineLearning,
        "Document classification and named-entity extraction pipeline.",
        "Models are cached under `~/.cache/nlp`.",
        ["Python", "Transformers", "spaCy"]
    ),
    project!(
        "9",
        "Recommendation System",
        MachineLearning,
        "Collaborative filtering with implicit feedback and offline evaluation.",
        "Evaluate with `python eval.py --k 10`.",
        ["Python", "NumPy", "SciPy"]
    ),
    project!(
        "10",
        "Financial Analysis Dashboard",
        DataScience,
        "Interactive portfolio analytics with risk and return breakdowns.",
        "Launch with `streamlit run app.py`.",
        ["Python", "Pandas", "Streamlit"]
    ),
    project!(
        "11",
        "Market Trend Predictor",
        DataScience,
        "Time-series forecasting of sector indices with backtesting.",
        "Backtests write reports to `reports/`.",
        ["Python", "statsmodels"]
    ),
    project!(
        "12",
        "Customer Segmentation",
        DataScience,
        "Clustering of purchase behaviour into actionable segments.",
        "Open `segmentation.ipynb` in Jupyter.",
        ["Python", "scikit-learn", "Jupyter"]
    ),
    project!(
        "13",
        "CI/CD Pipeline",
        DevOps,
        "Build, test, and deploy stages with preview environments per branch.",
        "Pipelines are defined in `.gitlab-ci.yml`.",
        ["YAML", "Docker", "GitLab CI"]
    ),
    project!(
        "14",
        "Cloud Infrastructure",
        DevOps,
        "Infrastructure as code for a multi-environment Kubernetes setup.",
        "Apply with `terraform apply -var-file=staging.tfvars`.",
        ["HCL", "Terraform", "Kubernetes"]
    ),
    project!(
        "15",
        "Monitoring Dashboard",
        DevOps,
        "Service health dashboards with alert routing.",
        "Import the dashboards from `grafana/`.",
        ["Go", "Prometheus", "Grafana"]
    ),
    project!(
        "16",
        "Design System",
        UiUx,
        "Tokens, components, and usage guidelines shared across products.",
        "Run `npm run storybook` to browse components.",
        ["TypeScript", "Storybook", "CSS"]
    ),
    project!(
        "17",
        "Portfolio Website",
        UiUx,
        "A desktop-style personal site with draggable windows and mini-games.",
        "Serve the site locally and open it in a browser.",
        ["Rust", "WebAssembly", "CSS"]
    ),
    project!(
        "18",
        "Landing Page Collection",
        UiUx,
        "Responsive marketing pages built from a shared section library.",
        "Each page lives under `pages/` with its own assets.",
        ["HTML", "CSS", "JavaScript"]
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Category filter applied to the gallery.
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Only(Category),
}

impl CategoryFilter {
    /// Filter chip label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

/// Projects matching `filter` whose name contains `query`, ignoring case.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    filter: CategoryFilter,
    query: &str,
) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|project| filter.admits(project.category))
        .filter(|project| needle.is_empty() || project.name.to_lowercase().contains(&needle))
        .collect()
}

/// Groups `projects` by category, in order of each category's first appearance.
pub fn group_by_category<'a>(projects: &[&'a Project]) -> Vec<(Category, Vec<&'a Project>)> {
    let mut groups: Vec<(Category, Vec<&'a Project>)> = Vec::new();
    for &project in projects {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == project.category)
        {
            Some((_, members)) => members.push(project),
            None => groups.push((project.category, vec![project])),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Position in a wrap-around carousel.
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` items starting at `index`; `None` when empty.
    pub fn new(index: usize, len: usize) -> Option<Self> {
        (len > 0).then(|| Self {
            index: index.min(len - 1),
            len,
        })
    }

    /// Current index.
    pub fn index(self) -> usize {
        self.index
    }

    /// Moves back one item, wrapping to the end.
    pub fn previous(self) -> Self {
        let index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    /// Moves forward one item, wrapping to the start.
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    /// `"n of len"` position caption.
    pub fn caption(self) -> String {
        format!("{} of {}", self.index + 1, self.len)
    }
}
