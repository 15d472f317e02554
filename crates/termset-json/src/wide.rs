//! UTF-16 text fields.

use std::fmt;

use serde_json::Value;

use crate::convert::JsonConvert;
use crate::error::JsonError;

/// Text stored as UTF-16 code units, for consumers that hand strings to
/// wide-character APIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WideString(Vec<u16>);

impl WideString {
    pub fn as_units(&self) -> &[u16] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode back to UTF-8, replacing unpaired surrogates.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.0)
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl JsonConvert for WideString {
    fn can_convert(json: &Value) -> bool {
        json.is_string()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_str()
            .map(WideString::from)
            .ok_or(JsonError::TypeMismatch)
    }
}
