//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    apps::{app_descriptor, AppCatalogError},
    model::{
        AppId, DesktopState, ViewportMetrics, WindowId, WindowPosition, WindowRecord, WindowSize,
    },
    window_manager::initial_window_rect,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or raise its window if one is already open.
    OpenApp {
        app_id: AppId,
        /// Viewport at the time of the request, used to fit the new window.
        viewport: ViewportMetrics,
        /// Wall-clock timestamp that becomes part of the new window id.
        opened_at_ms: u64,
    },
    /// Remove a window.
    CloseWindow { window_id: WindowId },
    /// Raise a window above all others and make it active.
    FocusWindow { window_id: WindowId },
    /// Overwrite a window's position. Callers clamp.
    MoveWindow {
        window_id: WindowId,
        position: WindowPosition,
    },
    /// Overwrite a window's size, and its position when a north/west edge moved.
    ResizeWindow {
        window_id: WindowId,
        size: WindowSize,
        position: Option<WindowPosition>,
    },
    /// Return to the empty initial desktop.
    CloseAll,
    /// Unlock hidden desktop content.
    RevealHidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window's primary input, if it has one.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors.
///
/// Actions that reference a window which no longer exists are not errors; they leave the state
/// untouched.
pub enum ReducerError {
    #[error(transparent)]
    Catalog(#[from] AppCatalogError),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::Catalog`] when an app to open has no catalog entry.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp {
            app_id,
            viewport,
            opened_at_ms,
        } => {
            if let Some(window_id) = state.window_for_app(app_id).map(|w| w.id) {
                focus_window_internal(state, window_id);
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
                return Ok(effects);
            }

            let descriptor = app_descriptor(app_id)?;
            let (rect, expanded) =
                initial_window_rect(descriptor.default_rect(), descriptor.expanded, viewport);
            let window_id = WindowId {
                app_id,
                opened_at_ms,
            };
            let z_index = take_next_z_index(state);
            state.windows.push(WindowRecord {
                id: window_id,
                app_id,
                title: descriptor.title.clone(),
                rect,
                z_index,
                expanded,
            });
            state.active_window = Some(window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
            if state.active_window == Some(window_id) {
                state.active_window = None;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if focus_window_internal(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.rect.x = position.x;
                window.rect.y = position.y;
            }
        }
        DesktopAction::ResizeWindow {
            window_id,
            size,
            position,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.rect.w = size.w;
                window.rect.h = size.h;
                if let Some(position) = position {
                    window.rect.x = position.x;
                    window.rect.y = position.y;
                }
            }
        }
        DesktopAction::CloseAll => {
            *state = DesktopState::default();
        }
        DesktopAction::RevealHidden => {
            state.hidden_revealed = true;
        }
    }

    Ok(effects)
}

fn take_next_z_index(state: &mut DesktopState) -> u32 {
    let z_index = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    z_index
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Gives `window_id` the next z-index and marks it active. Other windows keep their z-index.
///
/// Returns `false` when the window does not exist.
fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    if state.window(window_id).is_none() {
        return false;
    }
    let z_index = take_next_z_index(state);
    if let Some(window) = find_window_mut(state, window_id) {
        window.z_index = z_index;
    }
    state.active_window = Some(window_id);
    true
}
