use desktop_app_contract::AppId;
use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Soumil Baldota" />
        <Meta name="description" content="A desktop-style portfolio: about, work, projects, and a couple of games." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

/// Resolves the `?open=<slug>` deep link to an app.
fn deep_link_app(raw: Option<&str>) -> Option<AppId> {
    let slug = raw?.trim();
    if slug.is_empty() {
        return None;
    }
    let app = AppId::from_slug(slug);
    if app.is_none() {
        logging::warn!("ignoring deep link to unknown app `{slug}`");
    }
    app
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let initial_app = query.with_untracked(|map| deep_link_app(map.get("open").map(String::as_str)));

    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services() initial_app>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deep_link_resolves_known_slugs() {
        assert_eq!(deep_link_app(Some("flappy-bird")), Some(AppId::FlappyBird));
        assert_eq!(deep_link_app(Some(" contact ")), Some(AppId::Contact));
    }

    #[test]
    fn missing_or_unknown_deep_link_opens_nothing() {
        assert_eq!(deep_link_app(None), None);
        assert_eq!(deep_link_app(Some("")), None);
        assert_eq!(deep_link_app(Some("terminal")), None);
    }
}
