//! Named color schemes.
//!
//! Schemes are a named collection: a layer inserts each scheme it lists,
//! replacing any existing scheme with the same name wholesale. A malformed
//! scheme is a fatal error for the layer.

use std::collections::BTreeMap;

use serde_json::Value;
use termset_json::{get_required_value_for_key, get_value_for_key, get_values_for_keys};
use termset_json::{Color, JsonError};

const NAME_KEY: &str = "name";
const FOREGROUND_KEY: &str = "foreground";
const BACKGROUND_KEY: &str = "background";
const SELECTION_BACKGROUND_KEY: &str = "selectionBackground";
const CURSOR_COLOR_KEY: &str = "cursorColor";

/// Keys of the 16-entry color table, in table order.
pub const TABLE_KEYS: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "purple",
    "cyan",
    "white",
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightPurple",
    "brightCyan",
    "brightWhite",
];

/// Campbell palette, used for any color a scheme leaves out.
const CAMPBELL_TABLE: [Color; 16] = [
    Color::rgb(0x0c, 0x0c, 0x0c),
    Color::rgb(0xc5, 0x0f, 0x1f),
    Color::rgb(0x13, 0xa1, 0x0e),
    Color::rgb(0xc1, 0x9c, 0x00),
    Color::rgb(0x00, 0x37, 0xda),
    Color::rgb(0x88, 0x17, 0x98),
    Color::rgb(0x3a, 0x96, 0xdd),
    Color::rgb(0xcc, 0xcc, 0xcc),
    Color::rgb(0x76, 0x76, 0x76),
    Color::rgb(0xe7, 0x48, 0x56),
    Color::rgb(0x16, 0xc6, 0x0c),
    Color::rgb(0xf9, 0xf1, 0xa5),
    Color::rgb(0x3b, 0x78, 0xff),
    Color::rgb(0xb4, 0x00, 0x9e),
    Color::rgb(0x61, 0xd6, 0xd6),
    Color::rgb(0xf2, 0xf2, 0xf2),
];

const DEFAULT_FOREGROUND: Color = Color::rgb(0xcc, 0xcc, 0xcc);
const DEFAULT_BACKGROUND: Color = Color::rgb(0x0c, 0x0c, 0x0c);
const DEFAULT_SELECTION_BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
const DEFAULT_CURSOR_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

/// A named terminal color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub selection_background: Color,
    pub cursor_color: Color,
    pub table: [Color; 16],
}

impl ColorScheme {
    /// A scheme with the given name and the Campbell colors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
            selection_background: DEFAULT_SELECTION_BACKGROUND,
            cursor_color: DEFAULT_CURSOR_COLOR,
            table: CAMPBELL_TABLE,
        }
    }

    /// Parse one scheme object. `name` is required.
    pub fn from_json(json: &Value) -> Result<Self, JsonError> {
        if !json.is_object() {
            return Err(JsonError::TypeMismatch);
        }

        let mut scheme = ColorScheme::new(String::new());
        get_required_value_for_key(json, NAME_KEY, &mut scheme.name)?;
        get_values_for_keys!(
            json,
            FOREGROUND_KEY => &mut scheme.foreground,
            BACKGROUND_KEY => &mut scheme.background,
            SELECTION_BACKGROUND_KEY => &mut scheme.selection_background,
            CURSOR_COLOR_KEY => &mut scheme.cursor_color,
        )?;
        for (key, slot) in TABLE_KEYS.iter().zip(scheme.table.iter_mut()) {
            get_value_for_key(json, key, slot)?;
        }
        Ok(scheme)
    }
}

/// Color schemes keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSchemes {
    schemes: BTreeMap<String, ColorScheme>,
}

impl ColorSchemes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `scheme`, returning the same-named scheme it replaced.
    pub fn insert(&mut self, scheme: ColorScheme) -> Option<ColorScheme> {
        self.schemes.insert(scheme.name.clone(), scheme)
    }

    pub fn get(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Schemes in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorScheme> {
        self.schemes.values()
    }

    /// Apply one layer's `schemes` array.
    ///
    /// Entries are inserted in order; the first bad entry aborts the rest,
    /// leaving the entries before it in place.
    pub fn layer_json(&mut self, json: &Value) -> Result<(), JsonError> {
        let entries = match json {
            Value::Array(entries) => entries.as_slice(),
            Value::Object(_) => std::slice::from_ref(json),
            _ => return Err(JsonError::TypeMismatch),
        };

        for entry in entries {
            let scheme = ColorScheme::from_json(entry)?;
            if let Some(replaced) = self.insert(scheme) {
                tracing::debug!(scheme = %replaced.name, "replaced color scheme");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_uses_campbell() {
        let scheme = ColorScheme::new("x");
        assert_eq!(scheme.table[0], Color::rgb(0x0c, 0x0c, 0x0c));
        assert_eq!(scheme.table[15], Color::rgb(0xf2, 0xf2, 0xf2));
        assert_eq!(scheme.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_from_json_overrides_listed_colors() {
        let scheme = ColorScheme::from_json(&json!({
            "name": "Mine",
            "background": "#101010",
            "brightWhite": "#FAFAFA"
        }))
        .unwrap();

        assert_eq!(scheme.name, "Mine");
        assert_eq!(scheme.background, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(scheme.table[15], Color::rgb(0xfa, 0xfa, 0xfa));
        // unlisted colors keep the defaults
        assert_eq!(scheme.foreground, DEFAULT_FOREGROUND);
        assert_eq!(scheme.table[1], CAMPBELL_TABLE[1]);
    }

    #[test]
    fn test_name_is_required() {
        let err = ColorScheme::from_json(&json!({ "background": "#000000" })).unwrap_err();
        assert!(matches!(err, JsonError::MissingRequiredField { ref key } if key == "name"));
    }

    #[test]
    fn test_bad_color_is_keyed() {
        let err = ColorScheme::from_json(&json!({ "name": "x", "background": 12 })).unwrap_err();
        assert_eq!(err.key_path().as_deref(), Some("background"));
    }

    #[test]
    fn test_layer_replaces_same_name_wholesale() {
        let mut schemes = ColorSchemes::new();
        schemes
            .layer_json(&json!([{ "name": "A", "foreground": "#111111", "background": "#222222" }]))
            .unwrap();
        schemes
            .layer_json(&json!([{ "name": "A", "foreground": "#333333" }]))
            .unwrap();

        let a = schemes.get("A").unwrap();
        assert_eq!(a.foreground, Color::rgb(0x33, 0x33, 0x33));
        // not merged with the earlier entry
        assert_eq!(a.background, DEFAULT_BACKGROUND);
        assert_eq!(schemes.len(), 1);
    }

    #[test]
    fn test_layer_bad_entry_keeps_earlier_entries() {
        let mut schemes = ColorSchemes::new();
        let result = schemes.layer_json(&json!([
            { "name": "Good" },
            { "name": "Bad", "cursorColor": "red" },
            { "name": "Never" }
        ]));

        assert!(result.is_err());
        assert!(schemes.contains("Good"));
        assert!(!schemes.contains("Bad"));
        assert!(!schemes.contains("Never"));
    }

    #[test]
    fn test_layer_rejects_scalar() {
        let mut schemes = ColorSchemes::new();
        assert!(matches!(
            schemes.layer_json(&json!("Campbell")),
            Err(JsonError::TypeMismatch)
        ));
    }

    #[test]
    fn test_collection_key_prefixes_path() {
        let mut schemes = ColorSchemes::new();
        let err = termset_json::with_key(
            "schemes",
            schemes.layer_json(&json!([{ "name": "x", "background": false }])),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "error parsing \"schemes.background\": invalid type"
        );
    }
}
