use desktop_runtime::{apps::inject_component, case_study, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use slideshow::Slideshow;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A personal portfolio presented as a retro desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/case-studies/:slug" view=CaseStudyRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

/// A single case study rendered full-page, outside the desktop.
#[component]
pub fn CaseStudyRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|map| map.get("slug").cloned().unwrap_or_default());
    let inject = Callback::new(inject_component);

    view! {
        <section class="case-study-page">
            {move || match case_study(&slug()) {
                Some(study) => view! {
                    <Title text=study.title.clone() />
                    <Slideshow slides=study.slides title=study.title inject=inject />
                    <A href="/">"Back to the desktop"</A>
                }
                .into_view(),
                None => view! {
                    <h1>"Case study not found"</h1>
                    <p>{format!("Nothing is published under `{}`.", slug())}</p>
                    <A href="/">"Back to the desktop"</A>
                }
                .into_view(),
            }}
        </section>
    }
}
