//! XDG-style locations for settings documents.

use std::path::PathBuf;

/// Directory holding the user settings document.
pub fn settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termsettings")
}

/// Default location of the user settings document.
pub fn user_settings_path() -> PathBuf {
    settings_dir().join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_settings_path_is_under_settings_dir() {
        let path = user_settings_path();
        assert!(path.starts_with(settings_dir()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("settings.json")
        );
    }
}
