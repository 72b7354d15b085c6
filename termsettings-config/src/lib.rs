//! Settings data model for the termsettings reconciliation engine.
//!
//! This crate holds the plain data the engine reconciles:
//!
//! - Profiles and their identities
//! - Color schemes
//! - Global settings, keybindings and key chords
//! - Parsed settings documents with a typed query interface
//! - The warning vocabulary and document errors
//! - The embedded defaults document and first-run template

pub mod color_scheme;
pub mod defaults;
pub mod document;
pub mod error;
pub mod globals;
pub mod keybinding;
pub mod paths;
pub mod profile;
pub mod warnings;

// Re-export main types for convenience
pub use color_scheme::{Color, ColorScheme, FALLBACK_SCHEME_NAME};
pub use document::{ProfileEntry, SettingsDocument};
pub use error::DocumentError;
pub use globals::{ElementTheme, GlobalSettings};
pub use keybinding::{ActionAndArgs, KeyBindings, KeyChord, parse_key_chord};
pub use profile::{
    CloseOnExit, CursorShape, Profile, ProfileId, parse_profile_id, profile_id_to_string,
};
pub use warnings::SettingsLoadWarning;
