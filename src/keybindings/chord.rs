//! Key chord parsing (`"ctrl+shift+t"`).

use std::fmt;
use std::str::FromStr;

/// Named keys and their accepted spellings. The first spelling is canonical.
const NAMED_KEYS: &[(NamedKey, &[&str])] = &[
    (NamedKey::Enter, &["enter"]),
    (NamedKey::Tab, &["tab"]),
    (NamedKey::Space, &["space"]),
    (NamedKey::Backspace, &["backspace"]),
    (NamedKey::Delete, &["delete"]),
    (NamedKey::Insert, &["insert"]),
    (NamedKey::Home, &["home"]),
    (NamedKey::End, &["end"]),
    (NamedKey::PageUp, &["pgup", "pageup"]),
    (NamedKey::PageDown, &["pgdn", "pagedown"]),
    (NamedKey::Up, &["up"]),
    (NamedKey::Down, &["down"]),
    (NamedKey::Left, &["left"]),
    (NamedKey::Right, &["right"]),
    (NamedKey::Escape, &["esc", "escape"]),
    (NamedKey::Plus, &["plus"]),
    (NamedKey::Minus, &["minus"]),
];

const MAX_FUNCTION_KEY: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedKey {
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Escape,
    Plus,
    Minus,
}

impl NamedKey {
    fn canonical_name(self) -> &'static str {
        NAMED_KEYS
            .iter()
            .find(|(key, _)| *key == self)
            .and_then(|(_, names)| names.first().copied())
            .unwrap_or("?")
    }
}

/// The non-modifier part of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A printable character, stored lower-cased.
    Char(char),
    /// `f1` through `f24`.
    Function(u8),
    Named(NamedKey),
}

/// Modifier keys held for a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A key plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyChord {
    pub modifiers: KeyModifiers,
    pub key: Key,
}

/// Why a chord string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordParseError {
    #[error("empty key chord")]
    Empty,

    #[error("no key in chord \"{0}\"")]
    MissingKey(String),

    #[error("more than one key in chord \"{0}\"")]
    MultipleKeys(String),

    #[error("unknown key \"{0}\"")]
    UnknownKey(String),
}

fn parse_key(part: &str) -> Option<Key> {
    let mut chars = part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return (!c.is_control() && !c.is_whitespace()).then(|| Key::Char(c.to_ascii_lowercase()));
    }

    if let Some(number) = part.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=MAX_FUNCTION_KEY)
            .contains(&number)
            .then_some(Key::Function(number));
    }

    NAMED_KEYS
        .iter()
        .find(|(_, names)| names.contains(&part))
        .map(|(key, _)| Key::Named(*key))
}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut modifiers = KeyModifiers::default();
        let mut key = None;

        for part in normalized.split('+').map(str::trim) {
            match part {
                "ctrl" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "" => return Err(ChordParseError::UnknownKey(s.to_string())),
                _ => {
                    let parsed =
                        parse_key(part).ok_or_else(|| ChordParseError::UnknownKey(part.to_string()))?;
                    if key.replace(parsed).is_some() {
                        return Err(ChordParseError::MultipleKeys(s.to_string()));
                    }
                }
            }
        }

        match key {
            Some(key) => Ok(KeyChord { modifiers, key }),
            None => Err(ChordParseError::MissingKey(s.to_string())),
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c),
            Key::Function(n) => write!(f, "f{}", n),
            Key::Named(named) => f.write_str(named.canonical_name()),
        }
    }
}
