use super::*;
use crate::{
    interaction::GestureKind,
    model::{ResizeEdge, WindowId, WindowRecord},
    reducer::DesktopAction,
};

fn window_style(window: &WindowRecord, offset: crate::interaction::VisualOffset) -> String {
    let rect = offset.apply(window.rect);
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, window.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(window: WindowRecord) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = window.id;

    let record = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.window(window_id).cloned())
    });
    let offset = create_memo(move |_| {
        runtime
            .interaction
            .with(|ui| ui.visual_offset_for(window_id))
    });
    let is_active = create_memo(move |_| runtime.state.with(|desktop| desktop.is_active(window_id)));
    let expanded = create_memo(move |_| record.with(|win| win.as_ref().is_some_and(|w| w.expanded)));

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if expanded.get_untracked() || !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.begin_gesture(window_id, GestureKind::Move, pointer_from_pointer_event(&ev));
    };
    let close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    };

    view! {
        <section
            class="desktop-window"
            class:active=move || is_active.get()
            class:expanded=move || expanded.get()
            class:dragging=move || !offset.get().is_zero()
            data-window-id=window_id.to_string()
            style=move || {
                record
                    .with(|win| win.as_ref().map(|win| window_style(win, offset.get())))
                    .unwrap_or_default()
            }
            on:pointerdown=focus
            role="dialog"
            aria-label=window.title.clone()
        >
            <header class="titlebar" on:pointerdown=begin_move>
                <span class="titlebar-app-icon" aria-hidden="true">
                    {crate::apps::icon_glyph(window.app_id)}
                </span>
                <span class="titlebar-title">{window.title.clone()}</span>
                <button
                    type="button"
                    class="titlebar-close"
                    aria-label="Close window"
                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                    on:click=close
                >
                    "\u{00d7}"
                </button>
            </header>
            <div class="window-body">{crate::apps::render_window_contents(&window)}</div>
            <Show when=move || !expanded.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.begin_gesture(
            window_id,
            GestureKind::Resize(edge),
            pointer_from_pointer_event(&ev),
        );
    };

    view! {
        <div
            class=format!("window-resize-handle edge-{}", edge.css_class())
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        interaction::VisualOffset,
        model::{AppId, WindowRect},
    };

    #[test]
    fn style_renders_committed_rect_plus_offset() {
        let window = WindowRecord {
            id: WindowId {
                app_id: AppId::Paint,
                opened_at_ms: 3,
            },
            app_id: AppId::Paint,
            title: "Paint".to_string(),
            rect: WindowRect {
                x: 10,
                y: 40,
                w: 300,
                h: 200,
            },
            z_index: 7,
            expanded: false,
        };
        let offset = VisualOffset {
            dx: 5,
            dy: -5,
            dw: 20,
            dh: 0,
        };
        assert_eq!(
            window_style(&window, offset),
            "left:15px;top:35px;width:320px;height:200px;z-index:7;"
        );
    }
}
