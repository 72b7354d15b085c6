//! Error types for settings loading and settings building.
//!
//! Two tiers exist. [`SettingsLoadError`] aborts the whole load and the caller
//! must fall back to a separate built-in configuration. Everything else found
//! while loading is downgraded to a
//! [`SettingsLoadWarning`](termsettings_config::SettingsLoadWarning) and
//! repaired in place.

use termsettings_config::{DocumentError, ProfileId};

/// Fatal errors that abort settings construction.
#[derive(Debug, thiserror::Error)]
pub enum SettingsLoadError {
    /// Neither document nor any generator produced a profile.
    #[error("settings contain no profiles")]
    NoProfiles,

    /// Every profile was marked hidden.
    #[error("all profiles are hidden")]
    AllProfilesHidden,

    /// A settings document could not be parsed.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors from operations on an already-loaded settings object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No profile in the validated collection has this identity.
    #[error("no profile matches identity {}", .0.braced())]
    ProfileNotFound(ProfileId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_not_found_message_uses_braced_identity() {
        let id = ProfileId::from_u128(0x61c54bbd_c2c6_5271_96e7_009a87ff44bf);
        let err = SettingsError::ProfileNotFound(id);
        assert_eq!(
            err.to_string(),
            "no profile matches identity {61c54bbd-c2c6-5271-96e7-009a87ff44bf}"
        );
    }

    #[test]
    fn test_document_error_converts() {
        let doc_err = termsettings_config::SettingsDocument::from_json_str("[]")
            .expect_err("array root is invalid");
        let err: SettingsLoadError = doc_err.into();
        assert!(matches!(err, SettingsLoadError::Document(_)));
    }
}
