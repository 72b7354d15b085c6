//! Shared integration test helpers for termsettings.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{doc, load};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use termsettings::{Settings, SettingsLoadError, SettingsLoader, StaticProfileGenerator};
use termsettings_config::{Profile, ProfileId, SettingsDocument};

/// Parse a JSON settings document, panicking on malformed test input.
pub fn doc(json: &str) -> SettingsDocument {
    SettingsDocument::from_json_str(json).expect("test document must parse")
}

/// Load defaults + user documents without generators.
pub fn load(defaults: &str, user: &str) -> Result<Settings, SettingsLoadError> {
    Settings::load(doc(defaults), doc(user))
}

/// Load defaults + user documents with one static generator.
pub fn load_with_generated(
    defaults: &str,
    user: &str,
    namespace: &str,
    generated: Vec<Profile>,
) -> Result<Settings, SettingsLoadError> {
    SettingsLoader::new(doc(defaults))
        .user_settings(doc(user))
        .generator(StaticProfileGenerator::new(namespace, generated))
        .load()
}

/// Display names in collection order.
pub fn names(settings: &Settings) -> Vec<String> {
    settings
        .profiles()
        .iter()
        .map(|p| p.display_name().to_string())
        .collect()
}

/// Identity of the first profile with this display name.
pub fn id_of(settings: &Settings, name: &str) -> ProfileId {
    settings
        .profiles()
        .iter()
        .find(|p| p.display_name() == name)
        .and_then(|p| p.guid)
        .unwrap_or_else(|| panic!("no profile named {name}"))
}

/// Write `contents` to `file_name` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn write_temp(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}
