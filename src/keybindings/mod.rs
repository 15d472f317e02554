//! Keybinding table.
//!
//! A layer's `keybindings` array is parsed entry by entry. A bad entry
//! produces a [`Warning`] and is skipped; it never prevents the remaining
//! entries from being bound.

mod action;
mod chord;

pub use action::{Action, Direction, SplitStyle, ACTION_TAGS, UNBOUND_TAG};
pub use chord::{ChordParseError, Key, KeyChord, KeyModifiers, NamedKey};

use std::collections::BTreeMap;

use serde_json::Value;
use termset_json::JsonError;

use crate::warnings::{Warning, WarningKind};

const KEYS_KEY: &str = "keys";
const COMMAND_KEY: &str = "command";
const ACTION_KEY: &str = "action";

/// What one binding entry asks for.
enum BindingChange {
    Bind(KeyChord, Action),
    Unbind(KeyChord),
}

/// Key chords mapped to the actions they trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: BTreeMap<KeyChord, Action>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `chord`, returning the action it was previously bound to.
    pub fn bind(&mut self, chord: KeyChord, action: Action) -> Option<Action> {
        self.bindings.insert(chord, action)
    }

    pub fn unbind(&mut self, chord: &KeyChord) -> Option<Action> {
        self.bindings.remove(chord)
    }

    pub fn get(&self, chord: &KeyChord) -> Option<&Action> {
        self.bindings.get(chord)
    }

    /// Look a binding up by its chord text. Unparseable text has no binding.
    pub fn get_by_keys(&self, keys: &str) -> Option<&Action> {
        keys.parse::<KeyChord>().ok().and_then(|chord| self.get(&chord))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyChord, &Action)> {
        self.bindings.iter()
    }

    /// Apply one layer's `keybindings` value.
    ///
    /// Accepts an array of binding objects, or a single binding object. Any
    /// other JSON kind is a [`JsonError::TypeMismatch`]. Per-entry problems
    /// are returned as warnings, in entry order.
    pub fn layer_json(&mut self, json: &Value) -> Result<Vec<Warning>, JsonError> {
        let entries = match json {
            Value::Array(entries) => entries.as_slice(),
            Value::Object(_) => std::slice::from_ref(json),
            _ => return Err(JsonError::TypeMismatch),
        };

        let mut warnings = Vec::new();
        for entry in entries {
            match parse_entry(entry) {
                Ok(BindingChange::Bind(chord, action)) => {
                    self.bind(chord, action);
                }
                Ok(BindingChange::Unbind(chord)) => {
                    self.unbind(&chord);
                }
                Err(warning) => {
                    tracing::warn!(kind = %warning.kind, detail = %warning.detail, "skipping keybinding");
                    warnings.push(warning);
                }
            }
        }
        Ok(warnings)
    }
}

fn parse_entry(entry: &Value) -> Result<BindingChange, Warning> {
    if !entry.is_object() {
        return Err(Warning::new(
            WarningKind::MalformedBinding,
            format!("keybinding entry must be an object, found {}", entry),
        ));
    }

    let chord = parse_keys(entry.get(KEYS_KEY))?;

    match entry.get(COMMAND_KEY) {
        None => Err(Warning::new(
            WarningKind::MalformedBinding,
            format!("keybinding \"{}\" has no command", chord),
        )),
        Some(Value::Null) => Ok(BindingChange::Unbind(chord)),
        Some(Value::String(tag)) if tag == UNBOUND_TAG => Ok(BindingChange::Unbind(chord)),
        Some(Value::String(tag)) => {
            Action::from_tag(tag, &Value::Null).map(|action| BindingChange::Bind(chord, action))
        }
        Some(command @ Value::Object(_)) => {
            let mut tag = String::new();
            termset_json::get_required_value_for_key(command, ACTION_KEY, &mut tag).map_err(|err| {
                Warning::new(
                    WarningKind::MalformedBinding,
                    format!("keybinding \"{}\": {}", chord, err),
                )
            })?;
            if tag == UNBOUND_TAG {
                return Ok(BindingChange::Unbind(chord));
            }
            Action::from_tag(&tag, command).map(|action| BindingChange::Bind(chord, action))
        }
        Some(other) => Err(Warning::new(
            WarningKind::MalformedBinding,
            format!("keybinding \"{}\" has an invalid command: {}", chord, other),
        )),
    }
}

fn parse_keys(keys: Option<&Value>) -> Result<KeyChord, Warning> {
    let text = match keys {
        Some(Value::String(text)) => text.as_str(),
        Some(Value::Array(chords)) if chords.len() > 1 => {
            return Err(Warning::new(
                WarningKind::TooManyKeysForChord,
                format!("only one key chord may be bound per entry, found {}", chords.len()),
            ));
        }
        Some(Value::Array(chords)) => match chords.first() {
            Some(Value::String(text)) => text.as_str(),
            _ => {
                return Err(Warning::new(
                    WarningKind::InvalidKeyChord,
                    "\"keys\" must hold one key chord string",
                ))
            }
        },
        Some(other) => {
            return Err(Warning::new(
                WarningKind::InvalidKeyChord,
                format!("\"keys\" must be a string, found {}", other),
            ))
        }
        None => {
            return Err(Warning::new(
                WarningKind::InvalidKeyChord,
                "keybinding entry has no \"keys\"",
            ))
        }
    };

    text.parse::<KeyChord>()
        .map_err(|err| Warning::new(WarningKind::InvalidKeyChord, err.to_string()))
}
