//! Projects window: case-study index and an embedded slideshow per study.

use leptos::*;
use slideshow::Slideshow;

use super::{
    case_studies::{case_studies, PAINT_DEMO_COMPONENT},
    placeholders::paint_view,
};

/// Renders components requested by `Slide::Blank` in desktop decks.
pub fn inject_component(key: String) -> View {
    match key.as_str() {
        PAINT_DEMO_COMPONENT => paint_view(),
        other => {
            logging::warn!("no desktop component registered for `{other}`");
            ().into_view()
        }
    }
}

#[component]
pub(super) fn ProjectsApp() -> impl IntoView {
    let studies = store_value(case_studies());
    let selected = create_rw_signal::<Option<usize>>(None);
    let inject = Callback::new(inject_component);
    let jump = store_value(None::<Callback<usize>>);
    let register_jump = Callback::new(move |go_to: Callback<usize>| jump.set_value(Some(go_to)));
    let restart = move |_: ev::MouseEvent| {
        if let Some(go_to) = jump.get_value() {
            go_to.call(0);
        }
    };

    let index_view = move || {
        studies.with_value(|studies| {
            studies
                .iter()
                .enumerate()
                .map(|(index, study)| {
                    let title = study.title.clone();
                    let summary = study.summary.clone();
                    view! {
                        <li class="project-card">
                            <button type="button" class="project-open" on:click=move |_| selected.set(Some(index))>
                                <strong>{title}</strong>
                                <span>{summary}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="app app-projects">
            {move || {
                let study = selected
                    .get()
                    .and_then(|index| studies.with_value(|studies| studies.get(index).cloned()));
                match study {
                    Some(study) => view! {
                        <div class="project-deck">
                            <button type="button" class="app-action project-back" on:click=move |_| selected.set(None)>
                                "\u{2190} All projects"
                            </button>
                            <button type="button" class="app-action project-restart" on:click=restart>
                                "Restart"
                            </button>
                            <Slideshow
                                slides=study.slides
                                title=study.title
                                inject=inject
                                on_register_navigate=register_jump
                            />
                        </div>
                    }
                    .into_view(),
                    None => view! { <ul class="project-index">{index_view}</ul> }.into_view(),
                }
            }}
        </div>
    }
}
