//! Non-fatal settings load warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of recoverable problems found while loading settings.
///
/// These codes are stable so that a UI can map them to localized notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// A binding listed more than one key chord in `keys`.
    TooManyKeysForChord,
    /// An action that needs an argument was bound without it.
    MissingRequiredParameter,
    /// `keys` was missing or could not be parsed as a key chord.
    InvalidKeyChord,
    /// `command` named an action that does not exist.
    UnknownAction,
    /// A binding entry had the wrong shape.
    MalformedBinding,
    /// Global settings were found under the deprecated `globals` object.
    LegacyGlobalsProperty,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyKeysForChord => write!(f, "TOO_MANY_KEYS_FOR_CHORD"),
            Self::MissingRequiredParameter => write!(f, "MISSING_REQUIRED_PARAMETER"),
            Self::InvalidKeyChord => write!(f, "INVALID_KEY_CHORD"),
            Self::UnknownAction => write!(f, "UNKNOWN_ACTION"),
            Self::MalformedBinding => write!(f, "MALFORMED_BINDING"),
            Self::LegacyGlobalsProperty => write!(f, "LEGACY_GLOBALS_PROPERTY"),
        }
    }
}

/// One recoverable problem, reported to the user without blocking the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// Human-readable, single-line description.
    pub detail: String,
}

impl Warning {
    pub fn new(kind: WarningKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}
