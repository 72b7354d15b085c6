//! Producing [`EffectiveSettings`] from the validated model.

use termsettings_config::{ColorScheme, ProfileId};

use super::Settings;
use crate::effective::EffectiveSettings;
use crate::error::SettingsError;
use crate::new_terminal_args::{NewTerminalArgs, non_empty};

impl Settings {
    /// Build the settings for the profile with identity `id`.
    ///
    /// Layering: built-in defaults, then the profile's color scheme, then the
    /// profile's own fields, then the global options.
    pub fn build_settings(&self, id: ProfileId) -> Result<EffectiveSettings, SettingsError> {
        let profile = self
            .find_profile(id)
            .ok_or(SettingsError::ProfileNotFound(id))?;

        let mut settings = EffectiveSettings::default();
        settings.profile_id = id;
        if let Some(scheme) = self.color_scheme_for_profile(id) {
            settings.apply_color_scheme(scheme);
        }
        settings.apply_profile(profile);
        settings.apply_globals(&self.globals);
        Ok(settings)
    }

    /// Resolve the target profile of `args`, build its settings and apply
    /// the request's non-empty overrides.
    pub fn build_settings_for_args(
        &self,
        args: &NewTerminalArgs,
    ) -> Result<(ProfileId, EffectiveSettings), SettingsError> {
        let id = self.profile_for_args(args);
        let mut settings = self.build_settings(id)?;

        if let Some(commandline) = non_empty(&args.commandline) {
            settings.commandline = commandline.to_string();
        }
        if let Some(dir) = non_empty(&args.starting_directory) {
            settings.starting_directory = Some(dir.to_string());
        }
        if let Some(title) = non_empty(&args.tab_title) {
            settings.starting_title = title.to_string();
        }

        Ok((id, settings))
    }

    /// The scheme a profile renders with. `None` when the profile does not
    /// exist, names no scheme, or names an unknown one.
    pub fn color_scheme_for_profile(&self, id: ProfileId) -> Option<&ColorScheme> {
        let name = self
            .find_profile(id)?
            .color_scheme
            .as_deref()
            .filter(|name| !name.is_empty())?;
        self.globals.color_scheme(name)
    }

    /// Apply the named scheme to `settings`. Returns false if no scheme has
    /// that name, leaving `settings` untouched.
    pub fn apply_color_scheme(&self, settings: &mut EffectiveSettings, name: &str) -> bool {
        match self.globals.color_scheme(name) {
            Some(scheme) => {
                settings.apply_color_scheme(scheme);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::UriMediaResolver;
    use crate::options::LoadOptions;
    use termsettings_config::{GlobalSettings, Profile, SettingsDocument};

    const A: ProfileId = ProfileId::from_u128(0xa);
    const B: ProfileId = ProfileId::from_u128(0xb);

    fn settings() -> Settings {
        let mut globals = GlobalSettings::default();
        let mut dark = ColorScheme::campbell();
        dark.name = "Dark".to_string();
        globals.color_schemes.insert(dark.name.clone(), dark);
        globals.initial_rows = 48;
        globals.unparsed_default_profile = Some("a".to_string());

        let mut settings = Settings {
            globals,
            profiles: vec![
                Profile::new("a").guid(A).commandline("zsh").color_scheme("Dark"),
                Profile::new("b").guid(B).tab_title("Bee"),
            ],
            default_settings: SettingsDocument::empty(),
            user_settings: SettingsDocument::empty(),
            warnings: Vec::new(),
            options: LoadOptions::default(),
        };
        settings.validate(&UriMediaResolver::default()).expect("valid");
        settings
    }

    #[test]
    fn test_build_unknown_identity_is_an_error() {
        let missing = ProfileId::from_u128(0xdead);
        assert_eq!(
            settings().build_settings(missing),
            Err(SettingsError::ProfileNotFound(missing))
        );
    }

    #[test]
    fn test_build_layers_scheme_profile_and_globals() {
        let built = settings().build_settings(A).expect("build");
        assert_eq!(built.profile_id, A);
        assert_eq!(built.commandline, "zsh");
        assert_eq!(built.color_scheme.as_deref(), Some("Dark"));
        assert_eq!(built.starting_title, "a");
        assert_eq!(built.initial_rows, 48);
    }

    #[test]
    fn test_overrides_apply_only_when_non_empty() {
        let s = settings();
        let args = NewTerminalArgs {
            profile: Some("b".to_string()),
            commandline: Some("fish".to_string()),
            starting_directory: Some(String::new()),
            tab_title: Some(String::new()),
            ..NewTerminalArgs::default()
        };
        let (id, built) = s.build_settings_for_args(&args).expect("build");
        assert_eq!(id, B);
        assert_eq!(built.commandline, "fish");
        assert_eq!(built.starting_directory, None);
        assert_eq!(built.starting_title, "Bee");
    }

    #[test]
    fn test_scheme_lookup_is_optional() {
        let s = settings();
        assert_eq!(s.color_scheme_for_profile(A).map(|c| c.name.as_str()), Some("Dark"));
        assert!(s.color_scheme_for_profile(B).is_none());
        assert!(s.color_scheme_for_profile(ProfileId::from_u128(0xdead)).is_none());
    }

    #[test]
    fn test_apply_color_scheme_reports_lookup() {
        let s = settings();
        let mut built = s.build_settings(B).expect("build");
        assert!(!s.apply_color_scheme(&mut built, "Nope"));
        assert!(built.color_scheme.is_none());
        assert!(s.apply_color_scheme(&mut built, "Dark"));
        assert_eq!(built.color_scheme.as_deref(), Some("Dark"));
    }
}
