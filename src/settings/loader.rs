//! Building a [`Settings`] from documents and generators.

use termsettings_config::{GlobalSettings, SettingsDocument};

use super::Settings;
use super::merge::merge_profiles;
use crate::error::SettingsLoadError;
use crate::generators::{ProfileGenerator, run_generators};
use crate::media::{MediaResolver, UriMediaResolver};
use crate::options::LoadOptions;

/// Collects the inputs of one load.
///
/// ```
/// use termsettings::{SettingsLoader, StaticProfileGenerator};
/// use termsettings_config::{Profile, SettingsDocument, defaults};
///
/// let settings = SettingsLoader::new(defaults::document()?)
///     .user_settings(SettingsDocument::from_json_str(r#"{ "defaultProfile": "zsh" }"#)?)
///     .generator(StaticProfileGenerator::new("Shells", vec![Profile::new("zsh")]))
///     .load()?;
/// assert_eq!(settings.profiles().len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SettingsLoader {
    defaults: SettingsDocument,
    user: SettingsDocument,
    generators: Vec<Box<dyn ProfileGenerator>>,
    media_resolver: Option<Box<dyn MediaResolver>>,
    options: LoadOptions,
}

impl SettingsLoader {
    pub fn new(defaults: SettingsDocument) -> Self {
        Self {
            defaults,
            user: SettingsDocument::empty(),
            generators: Vec::new(),
            media_resolver: None,
            options: LoadOptions::default(),
        }
    }

    pub fn user_settings(mut self, user: SettingsDocument) -> Self {
        self.user = user;
        self
    }

    /// Register a generator. Generators run in registration order.
    pub fn generator(mut self, generator: impl ProfileGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// Replace the default [`UriMediaResolver`].
    pub fn media_resolver(mut self, resolver: impl MediaResolver + 'static) -> Self {
        self.media_resolver = Some(Box::new(resolver));
        self
    }

    pub fn options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Merge, validate and return the settings.
    pub fn load(&self) -> Result<Settings, SettingsLoadError> {
        let mut globals = GlobalSettings::default();
        globals.layer_document(&self.defaults);
        globals.layer_document(&self.user);

        let generated = if self.options.add_dynamic_profiles {
            run_generators(&self.generators)
        } else {
            log::debug!("Dynamic profiles disabled, skipping {} generator(s)", self.generators.len());
            Vec::new()
        };

        let profiles = merge_profiles(&self.defaults, &self.user, generated);

        let mut settings = Settings {
            globals,
            profiles,
            default_settings: self.defaults.clone(),
            user_settings: self.user.clone(),
            warnings: Vec::new(),
            options: self.options.clone(),
        };

        let fallback_resolver = UriMediaResolver::new(self.options.allow_all_env_vars);
        let resolver: &dyn MediaResolver = match &self.media_resolver {
            Some(resolver) => &**resolver,
            None => &fallback_resolver,
        };
        settings.validate(resolver)?;

        log::info!(
            "Loaded settings: {} profile(s), {} color scheme(s), default {}",
            settings.profiles.len(),
            settings.globals.color_schemes.len(),
            settings.globals.default_profile.braced()
        );
        Ok(settings)
    }
}

impl Settings {
    /// Settings built from the defaults document alone.
    ///
    /// This is what callers fall back to when loading the user's settings
    /// fails fatally.
    pub fn load_defaults(defaults: SettingsDocument) -> Result<Settings, SettingsLoadError> {
        SettingsLoader::new(defaults).load()
    }

    /// Settings from a defaults and a user document, without generators.
    pub fn load(defaults: SettingsDocument, user: SettingsDocument) -> Result<Settings, SettingsLoadError> {
        SettingsLoader::new(defaults).user_settings(user).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::StaticProfileGenerator;
    use termsettings_config::{Profile, SettingsLoadWarning, defaults};

    fn doc(json: &str) -> SettingsDocument {
        SettingsDocument::from_json_str(json).expect("parse")
    }

    #[test]
    fn test_embedded_defaults_load_cleanly() {
        let settings = Settings::load_defaults(defaults::document().expect("defaults")).expect("load");
        assert_eq!(settings.profiles().len(), 2);
        assert!(settings.warnings().is_empty());
        assert!(settings.find_profile(settings.default_profile_id()).is_some());
    }

    #[test]
    fn test_empty_documents_are_fatal() {
        assert!(matches!(
            Settings::load(SettingsDocument::empty(), SettingsDocument::empty()),
            Err(SettingsLoadError::NoProfiles)
        ));
    }

    #[test]
    fn test_disabling_dynamic_profiles_skips_generators() {
        let loader = SettingsLoader::new(doc(r#"{ "profiles": [ { "name": "a" } ] }"#))
            .generator(StaticProfileGenerator::new("Gen", vec![Profile::new("b")]))
            .options(LoadOptions {
                add_dynamic_profiles: false,
                ..LoadOptions::default()
            });
        let settings = loader.load().expect("load");
        assert_eq!(settings.profiles().len(), 1);
    }

    struct AcceptAll;

    impl MediaResolver for AcceptAll {
        fn expand(&self, path: &str) -> Result<String, crate::media::MediaError> {
            Ok(path.to_string())
        }
    }

    #[test]
    fn test_custom_media_resolver_is_used() {
        let defaults = doc(r#"{ "profiles": [ { "name": "a", "icon": "relative.png" } ] }"#);
        let strict = SettingsLoader::new(defaults.clone()).load().expect("load");
        assert_eq!(strict.profiles()[0].icon, None);

        let lenient = SettingsLoader::new(defaults)
            .media_resolver(AcceptAll)
            .load()
            .expect("load");
        assert_eq!(lenient.profiles()[0].icon.as_deref(), Some("relative.png"));
    }

    #[test]
    fn test_user_globals_layer_over_defaults() {
        let defaults = doc(r#"{ "initialRows": 30, "profiles": [ { "name": "a" } ], "defaultProfile": "a" }"#);
        let user = doc(r#"{ "initialRows": 40, "keybindings": [ { "command": "sendInput", "keys": "ctrl+k" } ] }"#);
        let settings = Settings::load(defaults, user).expect("load");

        assert_eq!(settings.globals().initial_rows, 40);
        assert_eq!(
            settings.warnings(),
            [
                SettingsLoadWarning::AtLeastOneKeybindingWarning,
                SettingsLoadWarning::MissingRequiredParameter,
            ]
        );
    }
}
