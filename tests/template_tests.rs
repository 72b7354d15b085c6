//! First-run template substitution against the embedded defaults.

use termsettings::{AppIdentity, FirstRunContext, LocalizedStrings, Settings};
use termsettings_config::defaults::{self, FALLBACK_DEFAULT_PROFILE_ID};
use termsettings_config::SettingsDocument;

struct German;

impl LocalizedStrings for German {
    fn localized_string(&self, key: &str) -> Option<String> {
        (key == "CommandPromptDisplayName").then(|| "Eingabeaufforderung".to_string())
    }
}

fn settings() -> Settings {
    Settings::load_defaults(defaults::document().expect("defaults")).expect("load")
}

#[test]
fn test_template_without_collaborators() {
    let out = settings().first_run_user_settings(&FirstRunContext::default());

    assert!(out.contains("%PRODUCT% %VERSION%"));
    assert!(!out.contains("%DEFAULT_PROFILE%"));
    assert!(!out.contains("%COMMAND_PROMPT_LOCALIZED_NAME%"));

    let doc = SettingsDocument::from_json_str(&out).expect("valid json");
    assert_eq!(doc.default_profile(), Some(FALLBACK_DEFAULT_PROFILE_ID));
    assert_eq!(doc.profile_entries()[1].name(), Some(""));
}

#[test]
fn test_template_with_all_collaborators() {
    let app = AppIdentity {
        product: "Terminal".to_string(),
        version: "1.4.0".to_string(),
    };
    let ctx = FirstRunContext {
        preferred_profile: Some("Command Prompt"),
        localization: Some(&German),
        app: Some(&app),
    };
    let out = settings().first_run_user_settings(&ctx);

    let doc = SettingsDocument::from_json_str(&out).expect("valid json");
    assert_eq!(
        doc.root().get("generatedBy").and_then(|v| v.as_str()),
        Some("Terminal 1.4.0")
    );
    assert_eq!(
        doc.default_profile(),
        Some("{0caa0dad-35be-5f56-a8ff-afceeeaa6101}")
    );
    assert_eq!(doc.profile_entries()[1].name(), Some("Eingabeaufforderung"));
}

#[test]
fn test_substituted_template_loads_as_user_settings() {
    let s = settings();
    let user_text = s.first_run_user_settings(&FirstRunContext::default());
    let user = SettingsDocument::from_json_str(&user_text).expect("valid json");

    let reloaded = Settings::load(defaults::document().expect("defaults"), user).expect("load");
    assert_eq!(reloaded.profiles().len(), 2);
    assert_eq!(reloaded.default_profile_id(), s.default_profile_id());
}
