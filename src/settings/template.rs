//! First-run template substitution.
//!
//! The user settings template carries `%TOKEN%` placeholders that are filled
//! in once, before the template is written out as the user's first settings
//! file. Missing collaborators are tolerated: a token whose value cannot be
//! determined is either substituted with an empty string (localized names)
//! or left as written (application identity).

use regex::Regex;
use std::sync::LazyLock;

use termsettings_config::defaults::{FALLBACK_DEFAULT_PROFILE_ID, USER_SETTINGS_TEMPLATE};

use super::Settings;

static TEMPLATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([A-Z_]+)%").expect("template token regex is a compile-time constant and must be valid")
});

/// Localization key for the Command Prompt display name.
pub const COMMAND_PROMPT_NAME_KEY: &str = "CommandPromptDisplayName";

/// Source of localized display strings.
pub trait LocalizedStrings {
    fn localized_string(&self, key: &str) -> Option<String>;
}

/// Name and version of the hosting application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub product: String,
    pub version: String,
}

/// Collaborators for [`Settings::apply_first_run_changes`]. All optional.
#[derive(Default, Clone, Copy)]
pub struct FirstRunContext<'a> {
    /// Profile name the user settings should default to, if present
    pub preferred_profile: Option<&'a str>,
    pub localization: Option<&'a dyn LocalizedStrings>,
    pub app: Option<&'a AppIdentity>,
}

impl Settings {
    /// Substitute the first-run tokens in `template`.
    ///
    /// - `%DEFAULT_PROFILE%`: identity of the preferred profile when it
    ///   resolves, else the built-in fallback identity. The current default
    ///   is not consulted; the template describes a fresh install.
    /// - `%PRODUCT%`, `%VERSION%`: only with an application identity.
    /// - `%COMMAND_PROMPT_LOCALIZED_NAME%`: localized name or empty.
    ///
    /// Unknown tokens are kept verbatim.
    pub fn apply_first_run_changes(&self, template: &str, ctx: &FirstRunContext<'_>) -> String {
        let default_profile = ctx
            .preferred_profile
            .and_then(|name| self.profile_id_by_name(name))
            .map(|id| id.braced().to_string())
            .unwrap_or_else(|| FALLBACK_DEFAULT_PROFILE_ID.to_string());

        TEMPLATE_TOKEN
            .replace_all(template, |caps: &regex::Captures| {
                let replacement = match &caps[1] {
                    "DEFAULT_PROFILE" => Some(default_profile.clone()),
                    "PRODUCT" => ctx.app.map(|app| app.product.clone()),
                    "VERSION" => ctx.app.map(|app| app.version.clone()),
                    "COMMAND_PROMPT_LOCALIZED_NAME" => Some(
                        ctx.localization
                            .and_then(|strings| strings.localized_string(COMMAND_PROMPT_NAME_KEY))
                            .unwrap_or_default(),
                    ),
                    _ => None,
                };
                replacement.unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// The embedded user settings template with first-run tokens filled in.
    pub fn first_run_user_settings(&self, ctx: &FirstRunContext<'_>) -> String {
        self.apply_first_run_changes(USER_SETTINGS_TEMPLATE, ctx)
    }
}
