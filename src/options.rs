//! Load-time options.

use serde::{Deserialize, Serialize};
use termsettings_config::FALLBACK_SCHEME_NAME;

fn default_add_dynamic_profiles() -> bool {
    true
}

fn default_fallback_color_scheme() -> String {
    FALLBACK_SCHEME_NAME.to_string()
}

/// Knobs controlling a single settings load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
    /// Run profile generators. When false only document profiles are used.
    #[serde(default = "default_add_dynamic_profiles")]
    pub add_dynamic_profiles: bool,

    /// Scheme name assigned to profiles that reference an unknown scheme
    #[serde(default = "default_fallback_color_scheme")]
    pub fallback_color_scheme: String,

    /// Substitute any environment variable in media paths
    #[serde(default)]
    pub allow_all_env_vars: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            add_dynamic_profiles: default_add_dynamic_profiles(),
            fallback_color_scheme: default_fallback_color_scheme(),
            allow_all_env_vars: false,
        }
    }
}
