//! Non-fatal irregularities found while loading settings.

use serde::Serialize;
use std::fmt;

/// A warning collected during validation.
///
/// Warnings never abort a load: each one corresponds to a problem that was
/// repaired automatically (or, for the legacy key, merely detected). The
/// application decides which of them to surface to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsLoadWarning {
    /// The default profile reference did not resolve; the first profile is used.
    MissingDefaultProfile,
    /// At least one profile shared its identity with an earlier one and was dropped.
    DuplicateProfile,
    /// At least one profile referenced a scheme that does not exist.
    UnknownColorScheme,
    /// At least one background image path could not be resolved and was cleared.
    InvalidBackgroundImage,
    /// At least one icon path could not be resolved and was cleared.
    InvalidIcon,
    /// Header preceding the keybinding-specific warnings.
    AtLeastOneKeybindingWarning,
    /// A keybinding listed more than one chord for a single action.
    TooManyKeysForChord,
    /// A keybinding's action was missing an argument it requires.
    MissingRequiredParameter,
    /// The user document still carries the obsolete top-level `globals` key.
    LegacyGlobalsProperty,
}

impl SettingsLoadWarning {
    /// Human-readable description suitable for a warning dialog.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingDefaultProfile => {
                "Could not find your default profile in your list of profiles - using the first profile."
            }
            Self::DuplicateProfile => {
                "Found multiple profiles with the same identity - using only the first one."
            }
            Self::UnknownColorScheme => {
                "Found a profile with an invalid color scheme - it was reset to the default scheme."
            }
            Self::InvalidBackgroundImage => {
                "Found a profile with an invalid background image - the image was removed."
            }
            Self::InvalidIcon => "Found a profile with an invalid icon - the icon was removed.",
            Self::AtLeastOneKeybindingWarning => "Warnings were found while parsing your keybindings:",
            Self::TooManyKeysForChord => {
                "Found a keybinding with too many strings for the \"keys\" array. There should only be one string value in the \"keys\" array."
            }
            Self::MissingRequiredParameter => {
                "Found a keybinding that was missing a required parameter value. This keybinding will be ignored."
            }
            Self::LegacyGlobalsProperty => {
                "The \"globals\" property is deprecated - your settings might need updating."
            }
        }
    }

    /// True for the warnings produced while parsing keybindings.
    pub fn is_keybinding_warning(&self) -> bool {
        matches!(
            self,
            Self::TooManyKeysForChord | Self::MissingRequiredParameter
        )
    }
}

impl fmt::Display for SettingsLoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
