//! Global (cross-cutting) settings.
//!
//! Global settings are layered: the defaults document first, then the user
//! document. Scalar options replace earlier values, schemes replace earlier
//! schemes with the same name, and keybindings replace earlier bindings for
//! the same chord.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::color_scheme::ColorScheme;
use crate::document::SettingsDocument;
use crate::keybinding::KeyBindings;
use crate::profile::ProfileId;
use crate::warnings::SettingsLoadWarning;

// ── Serde default helpers ──────────────────────────────────────────────

fn default_initial_rows() -> u32 {
    30
}

fn default_initial_cols() -> u32 {
    120
}

fn default_word_delimiters() -> String {
    " /\\()\"'-.,:;<>~!@#$%^&*|+=[]{}~?\u{2502}".to_string()
}

/// Overwrite `target` with `root[key]` when present and well-formed.
///
/// Each option is read on its own so a bad value only loses that option.
fn layer_option<T: DeserializeOwned>(root: &Map<String, Value>, key: &str, target: &mut T) {
    let Some(value) = root.get(key) else {
        return;
    };
    match T::deserialize(value) {
        Ok(parsed) => *target = parsed,
        Err(e) => log::warn!("Ignoring malformed global option '{key}': {e}"),
    }
}

/// Application theme requested by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementTheme {
    #[default]
    System,
    Light,
    Dark,
}

/// The singleton global settings record owned by the settings object.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSettings {
    /// Resolved default profile identity. `ProfileId::nil()` means unresolved.
    pub default_profile: ProfileId,

    /// Default profile reference exactly as written (identity string or name)
    pub unparsed_default_profile: Option<String>,

    /// Known color schemes by name
    pub color_schemes: BTreeMap<String, ColorScheme>,

    pub keybindings: KeyBindings,

    /// Warnings collected while layering keybindings, pulled by validation
    pub keybinding_warnings: Vec<SettingsLoadWarning>,

    pub initial_rows: u32,
    pub initial_cols: u32,
    pub copy_on_select: bool,
    pub word_delimiters: String,
    pub always_show_tabs: bool,
    pub show_tabs_in_titlebar: bool,
    pub confirm_close_all_tabs: bool,
    pub snap_to_grid_on_resize: bool,
    pub theme: ElementTheme,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_profile: ProfileId::nil(),
            unparsed_default_profile: None,
            color_schemes: BTreeMap::new(),
            keybindings: KeyBindings::new(),
            keybinding_warnings: Vec::new(),
            initial_rows: default_initial_rows(),
            initial_cols: default_initial_cols(),
            copy_on_select: false,
            word_delimiters: default_word_delimiters(),
            always_show_tabs: true,
            show_tabs_in_titlebar: true,
            confirm_close_all_tabs: true,
            snap_to_grid_on_resize: false,
            theme: ElementTheme::default(),
        }
    }
}

impl GlobalSettings {
    /// Layer one document's global options, schemes and keybindings on top
    /// of the current values.
    pub fn layer_document(&mut self, document: &SettingsDocument) {
        if let Some(reference) = document.default_profile() {
            self.unparsed_default_profile = Some(reference.to_string());
        }

        self.apply_options(document.root());

        for scheme in document.schemes() {
            log::debug!("Loaded color scheme '{}'", scheme.name);
            self.color_schemes.insert(scheme.name.clone(), scheme);
        }

        let warnings = self.keybindings.layer_json(document.keybinding_entries());
        self.keybinding_warnings.extend(warnings);
    }

    fn apply_options(&mut self, root: &Map<String, Value>) {
        layer_option(root, "initialRows", &mut self.initial_rows);
        layer_option(root, "initialCols", &mut self.initial_cols);
        layer_option(root, "copyOnSelect", &mut self.copy_on_select);
        layer_option(root, "wordDelimiters", &mut self.word_delimiters);
        layer_option(root, "alwaysShowTabs", &mut self.always_show_tabs);
        layer_option(root, "showTabsInTitlebar", &mut self.show_tabs_in_titlebar);
        layer_option(root, "confirmCloseAllTabs", &mut self.confirm_close_all_tabs);
        layer_option(root, "snapToGridOnResize", &mut self.snap_to_grid_on_resize);
        layer_option(root, "theme", &mut self.theme);
    }

    /// Look up a scheme by exact name.
    pub fn color_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.color_schemes.get(name)
    }

    /// Whether the default profile has been resolved to a non-null identity.
    pub fn has_default_profile(&self) -> bool {
        !self.default_profile.is_nil()
    }
}
