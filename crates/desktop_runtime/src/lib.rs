//! Retro desktop runtime: window manager state, pointer interaction, app catalog and the Leptos
//! desktop shell.

pub mod apps;
pub mod components;
pub mod host;
pub mod interaction;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use apps::{case_studies, case_study, AppCatalogError, AppDescriptor};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use interaction::{GestureKind, GestureSession, InteractionState, VisualOffset};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
