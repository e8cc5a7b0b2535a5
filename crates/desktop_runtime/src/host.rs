//! Host-side helpers for executing reducer effects and querying browser environment state.
//!
//! Browser APIs are only touched on `wasm32`; native builds (unit tests) get fixed fallbacks so
//! the reducer and interaction code can be exercised without a DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{ViewportMetrics, WindowId},
    reducer::RuntimeEffect,
};

/// Viewport reported when no browser window is available.
pub const FALLBACK_VIEWPORT: ViewportMetrics = ViewportMetrics {
    width: 1280,
    height: 800,
};

/// DOM id for the text field that receives focus when `window_id` opens or is focused.
///
/// Apps opt in by rendering this id on their primary input.
pub fn window_primary_input_dom_id(window_id: WindowId) -> String {
    format!("window-primary-input-{window_id}")
}

#[derive(Debug, Clone, Copy, Default)]
/// Host adapter for runtime side effects and environment queries.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
        }
    }

    /// Focuses the window's primary input on the next tick, after the window has rendered.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dom_id = window_primary_input_dom_id(window_id);
            let callback = Closure::once_into_js(move || {
                let element = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.get_element_by_id(&dom_id))
                    .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
                if let Some(element) = element {
                    let _ = element.focus();
                }
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }

    /// Current browser viewport in CSS pixels.
    pub fn viewport_metrics(&self) -> ViewportMetrics {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(FALLBACK_VIEWPORT.height);
                return ViewportMetrics { width, height };
            }
        }

        FALLBACK_VIEWPORT
    }

    /// Wall-clock milliseconds since the Unix epoch.
    pub fn now_ms(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now().max(0.0) as u64
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|elapsed| elapsed.as_millis() as u64)
                .unwrap_or_default()
        }
    }
}
