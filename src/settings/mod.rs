//! The top-level settings object.
//!
//! A [`Settings`] owns everything a load produced: the validated profile
//! collection, the global settings, both raw documents and the warning list.
//! It is built by [`SettingsLoader`], validated once, and then treated as an
//! immutable snapshot (see [`crate::context::SettingsContext`]).
//!
//! The implementation is split by concern:
//!
//! - `loader`: document layering, generator invocation, the load entry points
//! - `merge`: profile merge and display ordering
//! - `validation`: the ordered repair pipeline
//! - `lookup`: resolving names, identities and indices to profiles
//! - `builder`: producing [`EffectiveSettings`](crate::EffectiveSettings)
//! - `template`: first-run template token substitution

mod builder;
mod loader;
mod lookup;
mod merge;
mod template;
mod validation;

pub use loader::SettingsLoader;
pub use template::{AppIdentity, FirstRunContext, LocalizedStrings};

use termsettings_config::{
    GlobalSettings, Profile, ProfileId, SettingsDocument, SettingsLoadWarning,
};

use crate::options::LoadOptions;

/// Reconciled, validated settings for one load.
#[derive(Debug, Clone)]
pub struct Settings {
    pub(crate) globals: GlobalSettings,
    pub(crate) profiles: Vec<Profile>,
    pub(crate) default_settings: SettingsDocument,
    pub(crate) user_settings: SettingsDocument,
    pub(crate) warnings: Vec<SettingsLoadWarning>,
    pub(crate) options: LoadOptions,
}

impl Settings {
    /// Validated profiles in display order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn globals(&self) -> &GlobalSettings {
        &self.globals
    }

    /// Warnings from the most recent validation run, in the order found.
    pub fn warnings(&self) -> &[SettingsLoadWarning] {
        &self.warnings
    }

    /// Identity of the default profile. Always matches a profile once
    /// validation has succeeded.
    pub fn default_profile_id(&self) -> ProfileId {
        self.globals.default_profile
    }

    /// The defaults document this object was built from.
    pub fn default_settings(&self) -> &SettingsDocument {
        &self.default_settings
    }

    /// The user document this object was built from.
    pub fn user_settings(&self) -> &SettingsDocument {
        &self.user_settings
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }
}
