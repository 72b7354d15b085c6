//! Typed error variants for the termsettings-config crate.
//!
//! Only document loading can fail in this crate. Everything downstream of a
//! parsed [`SettingsDocument`](crate::SettingsDocument) is infallible and
//! reports irregularities as [`SettingsLoadWarning`](crate::SettingsLoadWarning)
//! values instead.

use std::path::PathBuf;

/// Errors that can occur when turning raw settings text into a document.
///
/// # Example
///
/// ```rust,no_run
/// use termsettings_config::{DocumentError, SettingsDocument};
///
/// match SettingsDocument::from_json_str("[1, 2, 3]") {
///     Err(DocumentError::InvalidRoot) => { /* settings must be an object */ }
///     Err(e) => log::error!("{e}"),
///     Ok(_) => {}
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document could not be read from disk.
    #[error("I/O error reading settings document {path:?}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document contained invalid JSON.
    #[error("JSON parse error in settings document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document contained invalid YAML.
    #[error("YAML parse error in settings document: {0}")]
    ParseYaml(#[from] serde_yaml_ng::Error),

    /// The document parsed, but its top level is not a key-value object.
    #[error("settings document root must be an object")]
    InvalidRoot,
}
