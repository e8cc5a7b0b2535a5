//! Static content windows and the Paint placeholder.

use leptos::*;
use slideshow::{timeline::format_range, TimelineDate, TimelineEntry};

use super::case_studies::case_studies;
use crate::{model::AppId, runtime_context::use_desktop_runtime};

const DEFAULT_BRUSH_SIZE: u8 = 6;
const MAX_BRUSH_SIZE: u8 = 64;

pub(super) fn about_view() -> View {
    let runtime = use_desktop_runtime();
    view! {
        <div class="app app-about">
            <img class="about-portrait" src="/assets/portrait.png" alt="Portrait" />
            <h2>"Hi, I build things for screens."</h2>
            <p>
                "Product engineer working across Rust, the web platform and small hardware. "
                "Everything on this desktop is a window you can drag, resize and close."
            </p>
            <div class="app-toolbar">
                <button type="button" class="app-action" on:click=move |_| runtime.open_app(AppId::Projects)>
                    "See projects"
                </button>
                <button type="button" class="app-action" on:click=move |_| runtime.open_app(AppId::Contact)>
                    "Get in touch"
                </button>
            </div>
        </div>
    }
    .into_view()
}

fn experience() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            label: "Independent".to_string(),
            sub_label: Some("Consulting and product work".to_string()),
            start: TimelineDate::year_month(2022, 4),
            end: None,
            details: vec![
                "Rust and WebAssembly front ends".to_string(),
                "Embedded audio firmware".to_string(),
            ],
        },
        TimelineEntry {
            label: "Senior Engineer".to_string(),
            sub_label: Some("Hardware startup".to_string()),
            start: TimelineDate::year_month(2018, 9),
            end: Some(TimelineDate::year_month(2022, 3)),
            details: vec!["Led the companion app team".to_string()],
        },
        TimelineEntry {
            label: "Engineer".to_string(),
            sub_label: Some("Agency".to_string()),
            start: TimelineDate::year(2015),
            end: Some(TimelineDate::year(2018)),
            details: Vec::new(),
        },
    ]
}

pub(super) fn resume_view() -> View {
    view! {
        <div class="app app-resume">
            <h2>"Experience"</h2>
            <ul class="resume-list">
                {experience()
                    .into_iter()
                    .map(|entry| {
                        let range = format_range(&entry);
                        view! {
                            <li class="resume-entry">
                                <h3>{entry.label}</h3>
                                <p class="resume-meta">
                                    {entry.sub_label.unwrap_or_default()} " · " {range}
                                </p>
                                <ul>
                                    {entry
                                        .details
                                        .into_iter()
                                        .map(|detail| view! { <li>{detail}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h2>"Selected work"</h2>
            <ul class="resume-list">
                {case_studies()
                    .into_iter()
                    .map(|study| {
                        view! {
                            <li>
                                <a href=format!("/case-studies/{}", study.slug)>{study.title}</a>
                                " · "
                                {study.summary}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

pub(super) fn contact_view() -> View {
    view! {
        <div class="app app-contact">
            <p>"The fastest way to reach me is email."</p>
            <ul class="contact-links">
                <li><a href="mailto:hello@example.com">"hello@example.com"</a></li>
                <li><a href="https://github.com/" target="_blank" rel="noopener">"GitHub"</a></li>
                <li><a href="https://www.linkedin.com/" target="_blank" rel="noopener">"LinkedIn"</a></li>
            </ul>
        </div>
    }
    .into_view()
}

pub(super) fn secrets_view() -> View {
    view! {
        <div class="app app-secrets">
            <pre class="secrets-text">
                "You found it.\n\n"
                "This whole desktop started as a joke about how nobody reads portfolios.\n"
                "Thanks for poking around."
            </pre>
        </div>
    }
    .into_view()
}

/// Brush sizes from the range input, falling back to the default on bad input.
fn parse_brush_size(raw: &str) -> u8 {
    raw.trim()
        .parse::<u8>()
        .unwrap_or(DEFAULT_BRUSH_SIZE)
        .clamp(1, MAX_BRUSH_SIZE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PaintState {
    tool: String,
    brush_size: u8,
    color_hex: String,
    status: String,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            tool: "brush".to_string(),
            brush_size: DEFAULT_BRUSH_SIZE,
            color_hex: "#0b5fff".to_string(),
            status: "Canvas ready".to_string(),
        }
    }
}

pub(super) fn paint_view() -> View {
    view! { <PaintPlaceholder /> }.into_view()
}

#[component]
fn PaintPlaceholder() -> impl IntoView {
    let state = create_rw_signal(PaintState::default());

    view! {
        <div class="app app-paint">
            <div class="app-toolbar" role="group" aria-label="Paint controls">
                <label>
                    "Tool "
                    <select
                        class="app-field"
                        prop:value=move || state.get().tool
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.tool = value);
                        }
                    >
                        <option value="brush">"Brush"</option>
                        <option value="line">"Line"</option>
                        <option value="eraser">"Eraser"</option>
                        <option value="fill">"Fill"</option>
                    </select>
                </label>
                <label>
                    "Brush "
                    <input
                        class="app-field"
                        type="range"
                        min="1"
                        max=MAX_BRUSH_SIZE.to_string()
                        prop:value=move || state.get().brush_size.to_string()
                        on:input=move |ev| {
                            let value = parse_brush_size(&event_target_value(&ev));
                            state.update(|s| s.brush_size = value);
                        }
                    />
                </label>
                <label>
                    "Color "
                    <input
                        class="app-field"
                        type="color"
                        prop:value=move || state.get().color_hex
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.color_hex = value);
                        }
                    />
                </label>
                <button type="button" class="app-action" on:click=move |_| {
                    state.update(|s| s.status = "Canvas cleared".to_string());
                }>
                    "Clear"
                </button>
            </div>
            <div class="paint-canvas" aria-label="Canvas"></div>
            <div class="app-statusbar">
                <span>{move || {
                    let snapshot = state.get();
                    format!("{} | {}px | {}", snapshot.tool, snapshot.brush_size, snapshot.color_hex)
                }}</span>
                <span>{move || state.get().status}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn brush_size_input_is_clamped() {
        assert_eq!(parse_brush_size("12"), 12);
        assert_eq!(parse_brush_size("0"), 1);
        assert_eq!(parse_brush_size("200"), MAX_BRUSH_SIZE);
        assert_eq!(parse_brush_size("wide"), DEFAULT_BRUSH_SIZE);
    }

    #[test]
    fn resume_lists_current_role_first() {
        let entries = experience();
        assert_eq!(entries[0].end, None);
        assert_eq!(format_range(&entries[1]), "Sep 2018 - Mar 2022");
    }
}
