//! Loading settings documents from disk.

mod common;

use common::{names, write_temp};
use termsettings::{LoadOptions, Settings, SettingsLoader};
use termsettings_config::{DocumentError, SettingsDocument, SettingsLoadWarning, defaults};

#[test]
fn test_yaml_user_settings_layer_over_embedded_defaults() {
    let yaml = r#"
defaultProfile: Command Prompt
initialCols: 100
profiles:
  - guid: "{0caa0dad-35be-5f56-a8ff-afceeeaa6101}"
    fontSize: 10
  - name: htop
    commandline: htop
"#;
    let (_dir, path) = write_temp("settings.yaml", yaml);
    let user = SettingsDocument::from_path(&path).expect("yaml loads");
    let settings = Settings::load(defaults::document().expect("defaults"), user).expect("load");

    assert_eq!(names(&settings), ["Command Prompt", "htop", "Windows PowerShell"]);
    assert_eq!(settings.globals().initial_cols, 100);
    let cmd = &settings.profiles()[0];
    assert_eq!(cmd.font_size, Some(10.0));
    assert_eq!(cmd.commandline.as_deref(), Some("cmd.exe"));
    assert_eq!(settings.default_profile_id(), cmd.guid.expect("identity"));
    assert!(settings.warnings().is_empty());
}

#[test]
fn test_malformed_user_file_is_a_document_error() {
    let (_dir, path) = write_temp("settings.json", "{ \"profiles\": [ ");
    assert!(matches!(
        SettingsDocument::from_path(&path),
        Err(DocumentError::Parse(_))
    ));
}

#[test]
fn test_media_paths_expand_home_and_app_variables() {
    let json = r#"{
        "defaultProfile": "a",
        "profiles": [
            { "name": "a", "backgroundImage": "~/Pictures/bg.png" },
            { "name": "b", "icon": "${TERMSETTINGS_TEST_UNSET_VARIABLE}/icon.png" }
        ]
    }"#;
    let (_dir, path) = write_temp("settings.json", json);
    let user = SettingsDocument::from_path(&path).expect("json loads");
    let settings = SettingsLoader::new(SettingsDocument::empty())
        .user_settings(user)
        .options(LoadOptions::default())
        .load()
        .expect("load");

    let home_known = dirs::home_dir().is_some();
    assert_eq!(settings.profiles()[0].background_image.is_some(), home_known);
    assert_eq!(settings.profiles()[1].icon, None);
    assert!(settings.warnings().contains(&SettingsLoadWarning::InvalidIcon));
}
