//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    apps::{self, AppDescriptor},
    model::{AppId, DesktopState, PointerPosition},
    window_manager::{MENU_BAR_HEIGHT_PX, TASKBAR_HEIGHT_PX},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary button for mice, primary contact for touch and pen.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn active_window_title(state: &DesktopState) -> Option<String> {
    state
        .active_window
        .and_then(|window_id| state.window(window_id))
        .map(|window| window.title.clone())
}

#[component]
/// Renders the full desktop shell UI: menu bar, icons, windows and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && runtime.interaction.with_untracked(|ui| ui.is_active()) {
            ev.prevent_default();
            runtime.cancel_gesture();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        runtime.update_gesture(pointer_from_pointer_event(&ev));
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:gesturing=move || runtime.interaction.with(|ui| ui.is_active())
            on:pointermove=on_pointer_move
            on:pointerup=move |_| runtime.finish_gesture()
            on:pointercancel=move |_| runtime.cancel_gesture()
        >
            <MenuBar />
            <main
                class="desktop-surface"
                style=format!("top:{MENU_BAR_HEIGHT_PX}px;bottom:{TASKBAR_HEIGHT_PX}px;")
            >
                <ul class="desktop-icon-grid" aria-label="Desktop">
                    <For
                        each=move || apps::desktop_icon_apps(state.with(|desktop| desktop.hidden_revealed))
                        key=|app| app.app_id
                        let:app
                    >
                        <DesktopIcon app=app />
                    </For>
                </ul>
            </main>
            <div class="desktop-window-layer">
                <For
                    each=move || state.get().windows
                    key=|win| win.id
                    let:win
                >
                    <DesktopWindow window=win />
                </For>
            </div>
            <Taskbar />
        </div>
    }
}

#[component]
fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let title = create_memo(move |_| runtime.state.with(active_window_title));

    view! {
        <header class="menu-bar" style=format!("height:{MENU_BAR_HEIGHT_PX}px;")>
            <span class="menu-bar-brand">"Portfolio"</span>
            <span class="menu-bar-title">
                {move || title.get().unwrap_or_else(|| "Desktop".to_string())}
            </span>
            <button
                type="button"
                class="menu-bar-action"
                aria-label="Open terminal"
                on:click=move |_| runtime.open_app(AppId::Terminal)
            >
                ">_"
            </button>
        </header>
    }
}

#[component]
fn DesktopIcon(app: &'static AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = app.app_id;

    view! {
        <li class="desktop-icon" data-app-id=app_id.slug()>
            <button type="button" on:click=move |_| runtime.open_app(app_id)>
                <span class="desktop-icon-glyph" aria-hidden="true">{apps::icon_glyph(app_id)}</span>
                <span class="desktop-icon-label">{app.desktop_icon_label.clone()}</span>
            </button>
        </li>
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
    fn menu_bar_tracks_the_active_window() {
        let mut state = DesktopState::default();
        assert_eq!(active_window_title(&state), None);

        reduce_desktop(
            &mut state,
            DesktopAction::OpenApp {
                app_id: AppId::Contact,
                viewport: ViewportMetrics {
                    width: 1280,
                    height: 800,
                },
                opened_at_ms: 5,
            },
        )
        .expect("open contact");
        assert_eq!(active_window_title(&state), Some("Contact".to_string()));

        reduce_desktop(&mut state, DesktopAction::CloseAll).expect("close all");
        assert_eq!(active_window_title(&state), None);
    }
}
