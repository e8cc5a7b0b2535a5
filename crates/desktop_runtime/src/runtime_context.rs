//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the pointer interaction state, and the
//! runtime effect queue. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    host::DesktopHostContext,
    interaction::{GestureKind, GestureSession, InteractionState},
    model::{AppId, DesktopState, PointerPosition, ViewportMetrics, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    window_manager::work_area,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host adapter for runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Live drag/resize gesture. Never written by the reducer.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.host.get_value().viewport_metrics()
    }

    /// Opens `app_id`, or focuses its window if it is already open.
    pub fn open_app(&self, app_id: AppId) {
        let host = self.host.get_value();
        self.dispatch_action(DesktopAction::OpenApp {
            app_id,
            viewport: host.viewport_metrics(),
            opened_at_ms: host.now_ms(),
        });
    }

    /// Starts a move or resize gesture for an open window. Ignored while another gesture runs.
    pub fn begin_gesture(&self, window_id: WindowId, kind: GestureKind, pointer: PointerPosition) {
        if self.interaction.with_untracked(InteractionState::is_active) {
            return;
        }
        let session = self.state.with_untracked(|desktop| {
            desktop.window(window_id).map(|window| match kind {
                GestureKind::Move => GestureSession::begin_move(window, pointer),
                GestureKind::Resize(edge) => GestureSession::begin_resize(window, edge, pointer),
            })
        });
        if let Some(session) = session {
            self.interaction.set(InteractionState {
                gesture: Some(session),
            });
        }
    }

    pub fn update_gesture(&self, pointer: PointerPosition) {
        if !self.interaction.with_untracked(InteractionState::is_active) {
            return;
        }
        let area = work_area(self.viewport());
        self.interaction
            .update(|interaction| interaction.update(pointer, area));
    }

    /// Ends the live gesture and commits its geometry with one reducer action.
    pub fn finish_gesture(&self) {
        if !self.interaction.with_untracked(InteractionState::is_active) {
            return;
        }
        let mut commit = None;
        self.interaction
            .update(|interaction| commit = interaction.finish());
        if let Some(action) = commit {
            self.dispatch_action(action);
        }
    }

    /// Drops the live gesture; the window snaps back to its committed geometry.
    pub fn cancel_gesture(&self) {
        if self.interaction.with_untracked(InteractionState::is_active) {
            self.interaction.update(InteractionState::cancel);
        }
    }
}

fn install_effect_executor(runtime: DesktopRuntimeContext) {
    // Take the whole batch first so effects dispatched while draining queue up for the next run.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }
        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_runtime_effect(effect);
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    install_effect_executor(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
