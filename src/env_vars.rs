//! `${VAR}` substitution for media paths.
//!
//! Only allowlisted variables (and `TERMSETTINGS_*` / `LC_*` prefixed ones)
//! are resolved unless `allow_all` is set. A settings file copied from
//! somewhere else must not be able to smuggle `${API_TOKEN}` into a URI that
//! the application later fetches.

use regex::Regex;
use std::sync::LazyLock;

/// `${VAR}` or `${VAR:-default}`.
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?}")
        .expect("env-var substitution regex is a compile-time constant and must be valid")
});

/// Environment variables that are safe to substitute.
pub const ALLOWED_ENV_VARS: &[&str] = &[
    "HOME",
    "USER",
    "USERNAME",
    "USERPROFILE",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_CACHE_HOME",
    "TMPDIR",
    "TEMP",
    "TMP",
    "APPDATA",
    "LOCALAPPDATA",
    "PROGRAMFILES",
    "SYSTEMROOT",
    "WINDIR",
];

/// Prefix for application-specific variables, always allowed.
pub const APP_ENV_PREFIX: &str = "TERMSETTINGS_";

pub fn is_env_var_allowed(var_name: &str) -> bool {
    ALLOWED_ENV_VARS.contains(&var_name)
        || var_name.starts_with(APP_ENV_PREFIX)
        || var_name.starts_with("LC_")
}

/// Replace `${VAR}` references with their values.
///
/// Unset variables fall back to the `:-default` text when one is given and
/// are otherwise left as written, as are non-allowlisted ones. Callers that
/// need a fully resolved string check for a leftover `${` afterwards.
pub fn substitute_variables(input: &str, allow_all: bool) -> String {
    ENV_VAR_PATTERN
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = &caps[1];

            if !allow_all && !is_env_var_allowed(var_name) {
                log::warn!("Media path references non-allowlisted variable ${{{var_name}}}; left as-is");
                return caps[0].to_string();
            }

            match std::env::var(var_name) {
                Ok(val) => val,
                Err(_) => caps
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned()
}
