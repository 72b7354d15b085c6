//! The validation pipeline.
//!
//! Passes run in a fixed order; later passes rely on the invariants earlier
//! ones establish (identities exist before dedup, hidden profiles are gone
//! before the default is checked). Only an empty collection is fatal.
//! Everything else is repaired in place and recorded as a warning.

use std::collections::HashSet;

use termsettings_config::{ColorScheme, ProfileId, SettingsLoadWarning};

use super::Settings;
use super::merge::{display_order, reorder_profiles};
use crate::error::SettingsLoadError;
use crate::identity::ensure_identity;
use crate::media::MediaResolver;

/// Obsolete top-level key from the older settings schema.
const LEGACY_GLOBALS_KEY: &str = "globals";

impl Settings {
    /// Run the full pipeline. The warning list is rebuilt from scratch.
    ///
    /// Running it again on an already-validated object leaves the profiles
    /// and the default identity unchanged.
    pub fn validate(&mut self, resolver: &dyn MediaResolver) -> Result<(), SettingsLoadError> {
        self.warnings.clear();

        self.validate_profiles_exist()?;
        self.resolve_identities();
        self.reorder_profiles();
        self.remove_hidden_profiles()?;
        self.remove_duplicate_profiles();
        self.resolve_default_profile();
        self.validate_default_profile_exists();
        self.validate_color_schemes();
        self.validate_media_resources(resolver);
        self.validate_keybindings();
        self.validate_no_globals_key();

        log::info!(
            "Validated {} profile(s) with {} warning(s)",
            self.profiles.len(),
            self.warnings.len()
        );
        Ok(())
    }

    fn validate_profiles_exist(&self) -> Result<(), SettingsLoadError> {
        if self.profiles.is_empty() {
            log::error!("No profiles found in any settings source");
            return Err(SettingsLoadError::NoProfiles);
        }
        Ok(())
    }

    fn resolve_identities(&mut self) {
        for profile in &mut self.profiles {
            ensure_identity(profile);
        }
    }

    fn reorder_profiles(&mut self) {
        let order = display_order(&self.user_settings, &self.default_settings);
        let profiles = std::mem::take(&mut self.profiles);
        self.profiles = reorder_profiles(profiles, &order);
    }

    fn remove_hidden_profiles(&mut self) -> Result<(), SettingsLoadError> {
        self.profiles.retain(|profile| {
            if profile.is_hidden() {
                log::debug!("Removing hidden profile '{}'", profile.display_name());
            }
            !profile.is_hidden()
        });
        if self.profiles.is_empty() {
            log::error!("Every profile is hidden");
            return Err(SettingsLoadError::AllProfilesHidden);
        }
        Ok(())
    }

    fn remove_duplicate_profiles(&mut self) {
        let mut seen: HashSet<ProfileId> = HashSet::new();
        let before = self.profiles.len();
        self.profiles.retain(|profile| match profile.guid {
            Some(id) => seen.insert(id),
            None => true,
        });

        let removed = before - self.profiles.len();
        if removed > 0 {
            log::warn!("Removed {} duplicate profile(s)", removed);
            self.warnings.push(SettingsLoadWarning::DuplicateProfile);
        }
    }

    /// Recomputed from the unparsed reference on every run so a second run
    /// does not mistake the previous in-memory fallback for a user choice.
    fn resolve_default_profile(&mut self) {
        let resolved = self
            .globals
            .unparsed_default_profile
            .as_deref()
            .and_then(|reference| self.profile_id_by_name(reference));
        self.globals.default_profile = resolved.unwrap_or_else(ProfileId::nil);
    }

    fn validate_default_profile_exists(&mut self) {
        let default = self.globals.default_profile;
        let found = !default.is_nil() && self.find_profile(default).is_some();
        if found {
            return;
        }

        if let Some(first) = self.profiles.first().and_then(|p| p.guid) {
            log::warn!(
                "Default profile {:?} not found, using {}",
                self.globals.unparsed_default_profile,
                first.braced()
            );
            self.globals.default_profile = first;
        }
        self.warnings.push(SettingsLoadWarning::MissingDefaultProfile);
    }

    fn validate_color_schemes(&mut self) {
        let fallback = self.options.fallback_color_scheme.clone();
        // The fallback name must always resolve
        if !self.globals.color_schemes.contains_key(&fallback) {
            log::warn!("No color scheme named '{fallback}' loaded, registering the built-in palette under that name");
            let mut scheme = ColorScheme::campbell();
            scheme.name = fallback.clone();
            self.globals.color_schemes.insert(fallback.clone(), scheme);
        }

        let mut found_invalid = false;
        for profile in &mut self.profiles {
            let name = profile.color_scheme_name();
            if name.is_empty() || self.globals.color_schemes.contains_key(name) {
                continue;
            }
            log::warn!(
                "Profile '{}' references unknown color scheme '{}', using '{}'",
                profile.display_name(),
                name,
                fallback
            );
            profile.color_scheme = Some(fallback.clone());
            found_invalid = true;
        }

        if found_invalid {
            self.warnings.push(SettingsLoadWarning::UnknownColorScheme);
        }
    }

    fn validate_media_resources(&mut self, resolver: &dyn MediaResolver) {
        let mut invalid_background = false;
        let mut invalid_icon = false;

        for profile in &mut self.profiles {
            if let Some(path) = profile.background_image.as_deref().filter(|p| !p.is_empty())
                && let Err(e) = resolver.expand(path)
            {
                log::warn!(
                    "Clearing background image of '{}': {}",
                    profile.display_name(),
                    e
                );
                profile.background_image = None;
                invalid_background = true;
            }

            if let Some(path) = profile.icon.as_deref().filter(|p| !p.is_empty())
                && let Err(e) = resolver.expand(path)
            {
                log::warn!("Clearing icon of '{}': {}", profile.display_name(), e);
                profile.icon = None;
                invalid_icon = true;
            }
        }

        if invalid_background {
            self.warnings.push(SettingsLoadWarning::InvalidBackgroundImage);
        }
        if invalid_icon {
            self.warnings.push(SettingsLoadWarning::InvalidIcon);
        }
    }

    fn validate_keybindings(&mut self) {
        let keybinding_warnings = &self.globals.keybinding_warnings;
        if keybinding_warnings.is_empty() {
            return;
        }
        self.warnings.push(SettingsLoadWarning::AtLeastOneKeybindingWarning);
        self.warnings.extend(keybinding_warnings.iter().copied());
    }

    fn validate_no_globals_key(&mut self) {
        if self.user_settings.has_key(LEGACY_GLOBALS_KEY) {
            log::warn!("User settings still use the legacy \"globals\" key");
            self.warnings.push(SettingsLoadWarning::LegacyGlobalsProperty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaError, UriMediaResolver};
    use crate::options::LoadOptions;
    use termsettings_config::{ColorScheme, GlobalSettings, Profile, SettingsDocument};

    struct RejectAll;

    impl MediaResolver for RejectAll {
        fn expand(&self, path: &str) -> Result<String, MediaError> {
            Err(MediaError::RelativePath(path.to_string()))
        }
    }

    fn settings_with(profiles: Vec<Profile>) -> Settings {
        let mut globals = GlobalSettings::default();
        globals
            .color_schemes
            .insert("Campbell".to_string(), ColorScheme::campbell());
        Settings {
            globals,
            profiles,
            default_settings: SettingsDocument::empty(),
            user_settings: SettingsDocument::empty(),
            warnings: Vec::new(),
            options: LoadOptions::default(),
        }
    }

    #[test]
    fn test_empty_collection_is_fatal() {
        let mut settings = settings_with(Vec::new());
        assert!(matches!(
            settings.validate(&UriMediaResolver::default()),
            Err(SettingsLoadError::NoProfiles)
        ));
    }

    #[test]
    fn test_all_hidden_is_fatal() {
        let mut settings = settings_with(vec![
            Profile::new("a").hidden(true),
            Profile::new("b").hidden(true),
        ]);
        assert!(matches!(
            settings.validate(&UriMediaResolver::default()),
            Err(SettingsLoadError::AllProfilesHidden)
        ));
    }

    #[test]
    fn test_duplicates_collapse_to_first_with_one_warning() {
        let id = ProfileId::from_u128(1);
        let other = ProfileId::from_u128(2);
        let mut settings = settings_with(vec![
            Profile::new("P1").guid(id),
            Profile::new("P2").guid(id),
            Profile::new("Q1").guid(other),
            Profile::new("Q2").guid(other),
        ]);
        settings.globals.unparsed_default_profile = Some("P1".to_string());
        settings.validate(&UriMediaResolver::default()).expect("valid");

        let names: Vec<_> = settings.profiles.iter().map(Profile::display_name).collect();
        assert_eq!(names, ["P1", "Q1"]);
        assert_eq!(settings.warnings, vec![SettingsLoadWarning::DuplicateProfile]);
    }

    #[test]
    fn test_default_resolved_by_name() {
        let mut settings = settings_with(vec![Profile::new("a"), Profile::new("b")]);
        settings.globals.unparsed_default_profile = Some("b".to_string());
        settings.validate(&UriMediaResolver::default()).expect("valid");

        assert_eq!(settings.default_profile_id(), settings.profiles[1].guid.unwrap());
        assert!(settings.warnings.is_empty());
    }

    #[test]
    fn test_missing_default_falls_back_to_first() {
        let mut settings = settings_with(vec![Profile::new("a"), Profile::new("b")]);
        settings.globals.unparsed_default_profile =
            Some("{00000000-0000-0000-0000-00000000beef}".to_string());
        settings.validate(&UriMediaResolver::default()).expect("valid");

        assert_eq!(settings.default_profile_id(), settings.profiles[0].guid.unwrap());
        assert_eq!(settings.warnings, vec![SettingsLoadWarning::MissingDefaultProfile]);
    }

    #[test]
    fn test_unknown_schemes_reset_with_single_warning() {
        let mut settings = settings_with(vec![
            Profile::new("a").color_scheme("Foo"),
            Profile::new("b").color_scheme("Bar"),
            Profile::new("c").color_scheme("Campbell"),
        ]);
        settings.globals.unparsed_default_profile = Some("a".to_string());
        settings.validate(&UriMediaResolver::default()).expect("valid");

        assert!(settings.profiles.iter().all(|p| p.color_scheme_name() == "Campbell"));
        assert_eq!(settings.warnings, vec![SettingsLoadWarning::UnknownColorScheme]);
    }

    #[test]
    fn test_missing_fallback_scheme_is_registered() {
        let mut settings = settings_with(vec![Profile::new("a").color_scheme("Foo")]);
        settings.globals.color_schemes.clear();
        settings.globals.unparsed_default_profile = Some("a".to_string());
        settings.validate(&UriMediaResolver::default()).expect("valid");

        assert_eq!(settings.profiles[0].color_scheme_name(), "Campbell");
        assert!(settings.globals.color_scheme("Campbell").is_some());
        assert_eq!(settings.warnings, vec![SettingsLoadWarning::UnknownColorScheme]);

        settings.validate(&UriMediaResolver::default()).expect("valid");
        assert!(settings.warnings.is_empty());
    }

    #[test]
    fn test_media_fields_cleared_independently() {
        let mut settings = settings_with(vec![
            Profile::new("a").icon("x.png").background_image("y.png"),
            Profile::new("b").icon("z.png"),
            Profile::new("c"),
        ]);
        settings.globals.unparsed_default_profile = Some("a".to_string());
        settings.validate(&RejectAll).expect("valid");

        assert!(settings.profiles.iter().all(|p| p.icon.is_none()));
        assert!(settings.profiles.iter().all(|p| p.background_image.is_none()));
        assert_eq!(
            settings.warnings,
            vec![
                SettingsLoadWarning::InvalidBackgroundImage,
                SettingsLoadWarning::InvalidIcon,
            ]
        );
    }

    #[test]
    fn test_keybinding_warnings_follow_header() {
        let mut settings = settings_with(vec![Profile::new("a")]);
        settings.globals.unparsed_default_profile = Some("a".to_string());
        settings.globals.keybinding_warnings = vec![
            SettingsLoadWarning::MissingRequiredParameter,
            SettingsLoadWarning::TooManyKeysForChord,
        ];
        settings.validate(&UriMediaResolver::default()).expect("valid");

        assert_eq!(
            settings.warnings,
            vec![
                SettingsLoadWarning::AtLeastOneKeybindingWarning,
                SettingsLoadWarning::MissingRequiredParameter,
                SettingsLoadWarning::TooManyKeysForChord,
            ]
        );
    }

    #[test]
    fn test_legacy_globals_key_detected() {
        let mut settings = settings_with(vec![Profile::new("a")]);
        settings.globals.unparsed_default_profile = Some("a".to_string());
        settings.user_settings =
            SettingsDocument::from_json_str(r#"{ "globals": { "initialRows": 20 } }"#)
                .expect("parse");
        settings.validate(&UriMediaResolver::default()).expect("valid");

        assert_eq!(settings.warnings, vec![SettingsLoadWarning::LegacyGlobalsProperty]);
    }

    #[test]
    fn test_second_run_is_stable() {
        let mut settings = settings_with(vec![
            Profile::new("a").color_scheme("Foo"),
            Profile::new("b").hidden(true),
            Profile::new("a"),
        ]);
        settings.validate(&UriMediaResolver::default()).expect("first run");
        let profiles = settings.profiles.clone();
        let default = settings.default_profile_id();

        settings.validate(&UriMediaResolver::default()).expect("second run");
        assert_eq!(settings.profiles, profiles);
        assert_eq!(settings.default_profile_id(), default);
        assert_eq!(settings.warnings, vec![SettingsLoadWarning::MissingDefaultProfile]);
    }
}
