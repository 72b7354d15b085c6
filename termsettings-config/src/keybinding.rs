//! Keybinding types and the key chord parser.
//!
//! Keybinding entries look like:
//!
//! ```json
//! { "command": "newTab", "keys": "ctrl+shift+t" }
//! { "command": { "action": "splitPane", "split": "vertical" }, "keys": ["alt+shift+plus"] }
//! { "command": null, "keys": "ctrl+w" }
//! ```
//!
//! Only the validation surface lives here: chords are parsed and normalised,
//! actions are checked against their required arguments, and every problem is
//! reported as a [`SettingsLoadWarning`]. Executing actions is someone else's job.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

use crate::warnings::SettingsLoadWarning;

/// Error type for key chord parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(String);

/// Set of active modifiers for a key chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub win: bool,
}

/// The non-modifier part of a chord.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChordKey {
    /// A single character key, stored lowercase
    Character(char),
    /// A named key, stored by its canonical lowercase name
    Named(&'static str),
    /// Function key `f1`..`f24`
    Function(u8),
}

/// A parsed key chord (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: ChordKey,
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("shift".to_string());
        }
        if self.modifiers.win {
            parts.push("win".to_string());
        }
        match &self.key {
            ChordKey::Character(c) => parts.push(c.to_string()),
            ChordKey::Named(n) => parts.push((*n).to_string()),
            ChordKey::Function(n) => parts.push(format!("f{n}")),
        }
        write!(f, "{}", parts.join("+"))
    }
}

const NAMED_KEYS: &[(&[&str], &str)] = &[
    (&["enter", "return"], "enter"),
    (&["esc", "escape"], "esc"),
    (&["space"], "space"),
    (&["tab"], "tab"),
    (&["backspace"], "backspace"),
    (&["delete", "del"], "delete"),
    (&["insert", "ins"], "insert"),
    (&["home"], "home"),
    (&["end"], "end"),
    (&["pageup", "pgup"], "pgup"),
    (&["pagedown", "pgdn"], "pgdn"),
    (&["up", "arrowup"], "up"),
    (&["down", "arrowdown"], "down"),
    (&["left", "arrowleft"], "left"),
    (&["right", "arrowright"], "right"),
    (&["plus"], "plus"),
    (&["minus"], "minus"),
];

/// Parse a chord string like `ctrl+shift+t` (case-insensitive).
pub fn parse_key_chord(s: &str) -> Result<KeyChord, ParseError> {
    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        let part_lower = part.to_lowercase();

        let is_modifier = match part_lower.as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "win" | "super" => {
                modifiers.win = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "multiple keys specified in '{s}': found '{part}'"
                )));
            }
            key_part = Some(part_lower);
        } else if is_last {
            return Err(ParseError(format!(
                "key chord '{s}' ends with a modifier, no key specified"
            )));
        }
    }

    let key_str = key_part
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ParseError(format!("no key specified in '{s}'")))?;
    let key = parse_key(&key_str)?;

    Ok(KeyChord { modifiers, key })
}

fn parse_key(s: &str) -> Result<ChordKey, ParseError> {
    if let Some((_, canonical)) = NAMED_KEYS
        .iter()
        .find(|(names, _)| names.iter().any(|name| *name == s))
    {
        return Ok(ChordKey::Named(*canonical));
    }

    if let Some(n) = s.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
        && (1..=24).contains(&n)
    {
        return Ok(ChordKey::Function(n));
    }

    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(ChordKey::Character(c));
    }

    Err(ParseError(format!("unknown key: '{s}'")))
}

/// An action name plus whatever arguments the entry carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionAndArgs {
    pub action: String,
    pub args: Map<String, Value>,
}

impl ActionAndArgs {
    /// Look up a string argument
    pub fn arg_str(&self, name: &str) -> Option<&str> {
        self.args.get(name).and_then(Value::as_str)
    }
}

/// Actions this engine knows, with the arguments each one requires.
const KNOWN_ACTIONS: &[(&str, &[&str])] = &[
    ("adjustFontSize", &["delta"]),
    ("closePane", &[]),
    ("closeTab", &[]),
    ("closeWindow", &[]),
    ("copy", &[]),
    ("duplicateTab", &[]),
    ("find", &[]),
    ("moveFocus", &["direction"]),
    ("newTab", &[]),
    ("nextTab", &[]),
    ("openSettings", &[]),
    ("paste", &[]),
    ("prevTab", &[]),
    ("resetFontSize", &[]),
    ("resizePane", &["direction"]),
    ("scrollDown", &[]),
    ("scrollUp", &[]),
    ("sendInput", &["input"]),
    ("splitPane", &["split"]),
    ("switchToTab", &["index"]),
    ("toggleFullscreen", &[]),
];

/// Action name that explicitly removes a binding.
const UNBOUND_ACTION: &str = "unbound";

/// The keybinding table: chord to action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<KeyChord, ActionAndArgs>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the action bound to a chord.
    pub fn action_for(&self, chord: &KeyChord) -> Option<&ActionAndArgs> {
        self.bindings.get(chord)
    }

    /// Find the first chord (in chord order) bound to an action name.
    pub fn chord_for_action(&self, action: &str) -> Option<&KeyChord> {
        self.bindings
            .iter()
            .filter(|(_, a)| a.action == action)
            .map(|(chord, _)| chord)
            .min()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Layer a document's keybinding entries over this table.
    ///
    /// Later entries replace earlier bindings for the same chord. Returns the
    /// warnings raised by malformed entries, in entry order; malformed entries
    /// are skipped.
    pub fn layer_json(&mut self, entries: &[Value]) -> Vec<SettingsLoadWarning> {
        let mut warnings = Vec::new();

        for entry in entries {
            let Some(obj) = entry.as_object() else {
                log::debug!("Skipping non-object keybinding entry: {entry}");
                continue;
            };

            let chord_str = match obj.get("keys") {
                Some(Value::String(s)) => s.as_str(),
                Some(Value::Array(keys)) if keys.len() == 1 => match keys[0].as_str() {
                    Some(s) => s,
                    None => continue,
                },
                Some(Value::Array(keys)) if keys.len() > 1 => {
                    warnings.push(SettingsLoadWarning::TooManyKeysForChord);
                    continue;
                }
                _ => {
                    log::debug!("Skipping keybinding entry without keys: {entry}");
                    continue;
                }
            };

            let chord = match parse_key_chord(chord_str) {
                Ok(chord) => chord,
                Err(e) => {
                    log::warn!("Invalid key chord '{chord_str}': {e}");
                    continue;
                }
            };

            let action = match obj.get("command") {
                Some(Value::Null) => None,
                Some(Value::String(name)) => Some(ActionAndArgs {
                    action: name.clone(),
                    args: Map::new(),
                }),
                Some(Value::Object(cmd)) => match cmd.get("action").and_then(Value::as_str) {
                    Some(name) => {
                        let mut args = cmd.clone();
                        args.remove("action");
                        Some(ActionAndArgs {
                            action: name.to_string(),
                            args,
                        })
                    }
                    None => {
                        log::warn!("Keybinding '{chord}' command has no action");
                        continue;
                    }
                },
                _ => {
                    log::debug!("Skipping keybinding '{chord}' without a command");
                    continue;
                }
            };

            let Some(action) = action.filter(|a| a.action != UNBOUND_ACTION) else {
                if self.bindings.remove(&chord).is_some() {
                    log::debug!("Unbound keybinding '{chord}'");
                }
                continue;
            };

            let Some((_, required)) = KNOWN_ACTIONS.iter().find(|(name, _)| *name == action.action)
            else {
                log::warn!(
                    "Ignoring keybinding '{chord}' for unknown action '{}'",
                    action.action
                );
                continue;
            };

            if let Some(missing) = required.iter().find(|arg| !action.args.contains_key(**arg)) {
                log::warn!(
                    "Keybinding '{chord}' for action '{}' is missing required argument '{missing}'",
                    action.action
                );
                warnings.push(SettingsLoadWarning::MissingRequiredParameter);
                continue;
            }

            self.bindings.insert(chord, action);
        }

        warnings
    }
}
