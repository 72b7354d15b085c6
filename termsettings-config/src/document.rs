//! Immutable parsed settings documents with a typed query interface.
//!
//! The reconciliation engine never pokes at raw JSON nodes directly. It asks
//! a [`SettingsDocument`] for its profile entries, schemes, keybindings and
//! top-level keys, and gets typed answers back. The raw tree is retained for
//! the lifetime of the settings object so that later passes (display
//! ordering, legacy-key detection) can re-inspect the original structure.

use serde_json::{Map, Value};
use std::path::Path;

use crate::color_scheme::ColorScheme;
use crate::error::DocumentError;
use crate::profile::{Profile, ProfileId};

/// Key holding the profile list (or an object with `list` and `defaults`).
pub const PROFILES_KEY: &str = "profiles";
const PROFILES_LIST_KEY: &str = "list";
const PROFILES_DEFAULTS_KEY: &str = "defaults";
const SCHEMES_KEY: &str = "schemes";
const KEYBINDINGS_KEY: &str = "keybindings";
const DEFAULT_PROFILE_KEY: &str = "defaultProfile";

/// A parsed settings document (defaults or user).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

impl SettingsDocument {
    /// An empty document (no profiles, no schemes, no keys).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed tree. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DocumentError::InvalidRoot),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        Self::from_value(serde_yaml_ng::from_str(text)?)
    }

    /// Read and parse a document from disk. Files ending in `.yaml`/`.yml`
    /// are parsed as YAML, everything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        log::debug!("Parsing settings document {:?} (yaml={})", path, is_yaml);
        if is_yaml {
            Self::from_yaml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    /// Whether the document has the given top-level key.
    pub fn has_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// The raw top-level object.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// All object-shaped profile entries, in document order.
    ///
    /// Accepts both `"profiles": [...]` and
    /// `"profiles": { "list": [...], "defaults": {...} }`. Entries that are not
    /// objects are skipped.
    pub fn profile_entries(&self) -> Vec<ProfileEntry<'_>> {
        let list = match self.root.get(PROFILES_KEY) {
            Some(Value::Array(list)) => list,
            Some(Value::Object(obj)) => match obj.get(PROFILES_LIST_KEY) {
                Some(Value::Array(list)) => list,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };
        list.iter()
            .filter_map(Value::as_object)
            .map(|fields| ProfileEntry { fields })
            .collect()
    }

    /// The `profiles.defaults` object, if the document has one.
    pub fn profile_defaults(&self) -> Option<Profile> {
        let defaults = self
            .root
            .get(PROFILES_KEY)?
            .as_object()?
            .get(PROFILES_DEFAULTS_KEY)?;
        match serde_json::from_value(defaults.clone()) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("Ignoring malformed profiles.defaults object: {e}");
                None
            }
        }
    }

    /// All well-formed, named color schemes, in document order.
    pub fn schemes(&self) -> Vec<ColorScheme> {
        let Some(Value::Array(entries)) = self.root.get(SCHEMES_KEY) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| match serde_json::from_value::<ColorScheme>(entry.clone()) {
                Ok(scheme) if !scheme.name.is_empty() => Some(scheme),
                Ok(_) => {
                    log::warn!("Ignoring color scheme without a name");
                    None
                }
                Err(e) => {
                    log::warn!("Ignoring malformed color scheme: {e}");
                    None
                }
            })
            .collect()
    }

    /// Raw keybinding entries, in document order.
    pub fn keybinding_entries(&self) -> &[Value] {
        match self.root.get(KEYBINDINGS_KEY) {
            Some(Value::Array(entries)) => entries,
            _ => &[],
        }
    }

    /// The unparsed `defaultProfile` reference (identity string or name).
    pub fn default_profile(&self) -> Option<&str> {
        self.root.get(DEFAULT_PROFILE_KEY).and_then(Value::as_str)
    }
}

/// A typed view over one profile object in a document.
#[derive(Debug, Clone, Copy)]
pub struct ProfileEntry<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ProfileEntry<'a> {
    /// The explicit identity, if the entry has a parseable `guid`.
    pub fn guid(&self) -> Option<ProfileId> {
        self.str_field("guid")
            .and_then(|s| ProfileId::parse_str(s).ok())
    }

    pub fn name(&self) -> Option<&'a str> {
        self.str_field("name")
    }

    pub fn source(&self) -> Option<&'a str> {
        self.str_field("source")
    }

    /// Materialise the entry as a [`Profile`].
    pub fn to_profile(&self) -> Result<Profile, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }

    fn str_field(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
