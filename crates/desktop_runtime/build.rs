use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    app_id: String,
    title: String,
    desktop_icon_label: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    expanded: bool,
    show_on_desktop: bool,
    hidden_until_revealed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    apps: Vec<AppEntry>,
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch in {path}: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        );
    }
    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        if !seen.insert(app.app_id.as_str()) {
            panic!("duplicate app id `{}` in {path}", app.app_id);
        }
        if app.width <= 0 || app.height <= 0 {
            panic!(
                "app `{}` in {path} has non-positive size {}x{}",
                app.app_id, app.width, app.height
            );
        }
        if app.title.trim().is_empty() {
            panic!("app `{}` in {path} has an empty title", app.app_id);
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
