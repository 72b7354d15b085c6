//! Parameters of a request to open a new terminal.

use serde::{Deserialize, Serialize};

/// What the caller asked for when opening a terminal.
///
/// Empty strings mean "not specified" and never override profile values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTerminalArgs {
    /// Profile name or identity string
    pub profile: Option<String>,
    /// Position in the display order
    pub profile_index: Option<i32>,
    pub commandline: Option<String>,
    pub starting_directory: Option<String>,
    pub tab_title: Option<String>,
}

impl NewTerminalArgs {
    /// Request a specific profile by name or identity.
    pub fn for_profile(profile: impl Into<String>) -> Self {
        Self {
            profile: Some(profile.into()),
            ..Self::default()
        }
    }

    /// Request a profile by display position.
    pub fn for_index(index: i32) -> Self {
        Self {
            profile_index: Some(index),
            ..Self::default()
        }
    }
}

/// `Some(value)` only for a non-empty override.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
