//! App catalog lookups and window-content dispatch for the built-in apps.

mod case_studies;
mod placeholders;
mod projects;
mod terminal;

use std::sync::OnceLock;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::{projects::ProjectsApp, terminal::TerminalApp};
use crate::model::{AppId, WindowRecord, WindowRect};

pub use case_studies::{case_studies, case_study};
pub use projects::inject_component;
pub use terminal::{run_command, CommandHistory, CommandOutput, TerminalAction};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

const APP_CATALOG_SCHEMA_VERSION: u32 = 1;

/// Catalog entry for one app: default geometry and desktop presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: String,
    pub desktop_icon_label: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Always opens filling the work area.
    pub expanded: bool,
    pub show_on_desktop: bool,
    pub hidden_until_revealed: bool,
}

impl AppDescriptor {
    pub fn default_rect(&self) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }

    /// Whether the app is listed on the desktop for the given reveal state.
    pub fn visible_on_desktop(&self, hidden_revealed: bool) -> bool {
        self.show_on_desktop && (hidden_revealed || !self.hidden_until_revealed)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppCatalogError {
    #[error("app catalog is malformed: {0}")]
    Malformed(String),
    #[error("app catalog schema mismatch: expected {expected} found {found}")]
    SchemaMismatch { expected: u32, found: u32 },
    #[error("app `{0}` is not registered in the app catalog")]
    NotRegistered(AppId),
}

#[derive(Debug, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    apps: Vec<AppDescriptor>,
}

/// Parses a catalog document in the generated JSON shape.
///
/// # Errors
///
/// Returns [`AppCatalogError::Malformed`] for invalid JSON or unknown app ids, and
/// [`AppCatalogError::SchemaMismatch`] for an unsupported schema version.
pub fn parse_app_catalog(raw: &str) -> Result<Vec<AppDescriptor>, AppCatalogError> {
    let catalog: AppCatalog =
        serde_json::from_str(raw).map_err(|err| AppCatalogError::Malformed(err.to_string()))?;
    if catalog.schema_version != APP_CATALOG_SCHEMA_VERSION {
        return Err(AppCatalogError::SchemaMismatch {
            expected: APP_CATALOG_SCHEMA_VERSION,
            found: catalog.schema_version,
        });
    }
    Ok(catalog.apps)
}

/// The embedded app catalog, parsed on first use.
///
/// # Errors
///
/// Returns the parse error if the embedded catalog is invalid.
pub fn app_catalog() -> Result<&'static [AppDescriptor], AppCatalogError> {
    static CATALOG: OnceLock<Result<Vec<AppDescriptor>, AppCatalogError>> = OnceLock::new();
    CATALOG
        .get_or_init(|| parse_app_catalog(APP_CATALOG_JSON))
        .as_deref()
        .map_err(Clone::clone)
}

/// # Errors
///
/// Returns [`AppCatalogError::NotRegistered`] when `app_id` has no entry.
pub fn app_descriptor(app_id: AppId) -> Result<&'static AppDescriptor, AppCatalogError> {
    app_catalog()?
        .iter()
        .find(|entry| entry.app_id == app_id)
        .ok_or(AppCatalogError::NotRegistered(app_id))
}

/// Apps with a desktop icon for the current reveal state, in catalog order.
pub fn desktop_icon_apps(hidden_revealed: bool) -> Vec<&'static AppDescriptor> {
    match app_catalog() {
        Ok(catalog) => catalog
            .iter()
            .filter(|entry| entry.visible_on_desktop(hidden_revealed))
            .collect(),
        Err(err) => {
            logging::warn!("desktop icons unavailable: {err}");
            Vec::new()
        }
    }
}

pub fn icon_glyph(app_id: AppId) -> &'static str {
    match app_id {
        AppId::About => "\u{1f464}",
        AppId::Projects => "\u{1f4c1}",
        AppId::Resume => "\u{1f4c4}",
        AppId::Contact => "\u{2709}",
        AppId::Terminal => "\u{1f5b3}",
        AppId::Paint => "\u{1f3a8}",
        AppId::Secrets => "\u{1f511}",
    }
}

pub fn render_window_contents(window: &WindowRecord) -> View {
    match window.app_id {
        AppId::About => placeholders::about_view(),
        AppId::Projects => view! { <ProjectsApp /> }.into_view(),
        AppId::Resume => placeholders::resume_view(),
        AppId::Contact => placeholders::contact_view(),
        AppId::Terminal => view! { <TerminalApp window_id=window.id /> }.into_view(),
        AppId::Paint => placeholders::paint_view(),
        AppId::Secrets => placeholders::secrets_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    #[test]
    fn embedded_catalog_registers_every_app() {
        for app_id in AppId::ALL {
            let descriptor = app_descriptor(app_id).expect("descriptor");
            assert_eq!(descriptor.app_id, app_id);
            assert!(descriptor.width >= MIN_WINDOW_WIDTH, "{app_id}");
            assert!(descriptor.height >= MIN_WINDOW_HEIGHT, "{app_id}");
        }
    }

    #[test]
    fn secrets_icon_appears_only_after_reveal() {
        let hidden: Vec<_> = desktop_icon_apps(false).iter().map(|d| d.app_id).collect();
        let revealed: Vec<_> = desktop_icon_apps(true).iter().map(|d| d.app_id).collect();

        assert!(!hidden.contains(&AppId::Secrets));
        assert!(revealed.contains(&AppId::Secrets));
        assert_eq!(revealed.len(), hidden.len() + 1);
    }

    #[test]
    fn catalog_parse_rejects_unknown_ids_and_schema() {
        let unknown = r#"{"schema_version": 1, "apps": [{"app_id": "minesweeper", "title": "x",
            "desktop_icon_label": "x", "x": 0, "y": 0, "width": 300, "height": 200,
            "expanded": false, "show_on_desktop": true, "hidden_until_revealed": false}]}"#;
        assert!(matches!(
            parse_app_catalog(unknown),
            Err(AppCatalogError::Malformed(_))
        ));

        assert_eq!(
            parse_app_catalog(r#"{"schema_version": 2, "apps": []}"#),
            Err(AppCatalogError::SchemaMismatch {
                expected: 1,
                found: 2,
            })
        );
    }
}
