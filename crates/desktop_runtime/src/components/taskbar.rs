use super::*;
use crate::{model::WindowId, reducer::DesktopAction};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskbarEntry {
    window_id: WindowId,
    title: String,
}

/// Taskbar buttons in the order their windows were opened, independent of stacking.
fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    let mut entries: Vec<TaskbarEntry> = state
        .windows
        .iter()
        .map(|window| TaskbarEntry {
            window_id: window.id,
            title: window.title.clone(),
        })
        .collect();
    entries.sort_by_key(|entry| (entry.window_id.opened_at_ms, entry.window_id.app_id));
    entries
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = create_memo(move |_| runtime.state.with(taskbar_entries));

    view! {
        <nav
            class="taskbar"
            aria-label="Open windows"
            style=format!("height:{TASKBAR_HEIGHT_PX}px;")
        >
            <div class="taskbar-windows" role="toolbar">
                <For each=move || entries.get() key=|entry| entry.window_id let:entry>
                    <TaskbarButton entry=entry />
                </For>
            </div>
            <button
                type="button"
                class="taskbar-close-all"
                disabled=move || entries.with(Vec::is_empty)
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseAll)
            >
                "Close all"
            </button>
        </nav>
    }
}

#[component]
fn TaskbarButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = entry.window_id;
    let is_active = create_memo(move |_| runtime.state.with(|desktop| desktop.is_active(window_id)));

    view! {
        <button
            type="button"
            class="taskbar-window-button"
            class:active=move || is_active.get()
            aria-pressed=move || is_active.get().to_string()
            on:click=move |_| runtime.dispatch_action(DesktopAction::FocusWindow { window_id })
        >
            <span aria-hidden="true">{apps::icon_glyph(window_id.app_id)}</span>
            <span>{entry.title}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::ViewportMetrics,
        reducer::{reduce_desktop, DesktopAction},
    };

    #[test]
    fn entries_follow_open_order_not_focus_order() {
        let mut state = DesktopState::default();
        let viewport = ViewportMetrics {
            width: 1280,
            height: 800,
        };
        for (app_id, opened_at_ms) in [(AppId::Resume, 10), (AppId::About, 20), (AppId::Paint, 30)] {
            reduce_desktop(
                &mut state,
                DesktopAction::OpenApp {
                    app_id,
                    viewport,
                    opened_at_ms,
                },
            )
            .expect("open");
        }
        let resume = state.window_for_app(AppId::Resume).expect("resume").id;
        reduce_desktop(&mut state, DesktopAction::FocusWindow { window_id: resume })
            .expect("focus");

        let titles: Vec<String> = taskbar_entries(&state)
            .into_iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(titles, vec!["Resume", "About Me", "Paint"]);
    }
}
