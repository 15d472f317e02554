//! RGB colors written as `#RRGGBB` or `#RGB`.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::convert::JsonConvert;
use crate::error::JsonError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || JsonError::InvalidValue {
            expected: "color",
            value: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        let expanded = match digits.len() {
            6 => digits.to_string(),
            // #RGB is shorthand for #RRGGBB
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(invalid()),
        };

        let bytes = hex::decode(expanded).map_err(|_| invalid())?;
        match bytes.as_slice() {
            [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

impl JsonConvert for Color {
    fn can_convert(json: &Value) -> bool {
        json.is_string()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_str().ok_or(JsonError::TypeMismatch)?.parse()
    }
}
