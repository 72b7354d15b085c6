//! Embedded defaults document and first-run user settings template.

use crate::document::SettingsDocument;
use crate::error::DocumentError;

/// The built-in defaults document, layered beneath every user document.
pub const DEFAULTS_JSON: &str = include_str!("../assets/defaults.json");

/// The user settings template written on first run. Contains `%TOKEN%`
/// placeholders that must be substituted before the text is parsed.
pub const USER_SETTINGS_TEMPLATE: &str = include_str!("../assets/user_template.json");

/// Identity of the profile `%DEFAULT_PROFILE%` falls back to when no
/// preferred profile is found. Must match the defaults document.
pub const FALLBACK_DEFAULT_PROFILE_ID: &str = "{61c54bbd-c2c6-5271-96e7-009a87ff44bf}";

/// Parse the embedded defaults document.
pub fn document() -> Result<SettingsDocument, DocumentError> {
    SettingsDocument::from_json_str(DEFAULTS_JSON)
}
