//! Settings layers and their provenance.
//!
//! A layer is one parsed document plus a record of where it came from.
//! Layers are immutable; applying one never changes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::error::SettingsError;

/// Defaults shipped with the application: color schemes and keybindings.
const PACKAGED_DEFAULTS: &str = include_str!("defaults.json");

/// Where a layer came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayerOrigin {
    /// The packaged defaults document.
    Defaults,
    /// A user settings file.
    User,
    /// A document supplied directly by the caller.
    Inline,
}

/// Provenance of one layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerSource {
    pub origin: LayerOrigin,

    /// File path (None for documents not read from disk)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of the raw bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// One immutable settings document.
#[derive(Debug, Clone)]
pub struct Layer {
    source: LayerSource,
    document: Value,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

impl Layer {
    /// Wrap an already-parsed document.
    pub fn new(origin: LayerOrigin, document: Value) -> Self {
        Self {
            source: LayerSource {
                origin,
                path: None,
                digest: None,
            },
            document,
        }
    }

    /// Parse a JSON document from text.
    pub fn from_json_str(origin: LayerOrigin, text: &str) -> Result<Self, SettingsError> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?;
        Ok(Self {
            source: LayerSource {
                origin,
                path: None,
                digest: Some(sha256_hex(text.as_bytes())),
            },
            document,
        })
    }

    /// The packaged defaults document.
    pub fn packaged_defaults() -> Result<Self, SettingsError> {
        Self::from_json_str(LayerOrigin::Defaults, PACKAGED_DEFAULTS)
    }

    /// Read a settings file. Files ending in `.toml` are parsed as TOML and
    /// converted to the equivalent JSON document; anything else is JSON.
    pub fn load(origin: LayerOrigin, path: &Path) -> Result<Self, SettingsError> {
        let bytes = fs::read(path)
            .map_err(|e| SettingsError::IoError(format!("{}: {}", path.display(), e)))?;
        let digest = sha256_hex(&bytes);

        let contents = String::from_utf8(bytes)
            .map_err(|e| SettingsError::ParseError(format!("Invalid UTF-8: {}", e)))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let document = if is_toml {
            let toml_value: toml::Value = toml::from_str(&contents)
                .map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?;
            toml_to_json(toml_value)?
        } else {
            serde_json::from_str(&contents)
                .map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?
        };

        tracing::debug!(path = %path.display(), %digest, "loaded settings layer");

        Ok(Self {
            source: LayerSource {
                origin,
                path: Some(path.to_string_lossy().to_string()),
                digest: Some(digest),
            },
            document,
        })
    }

    pub fn source(&self) -> &LayerSource {
        &self.source
    }

    pub fn origin(&self) -> LayerOrigin {
        self.source.origin
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

/// Re-express a TOML document as the JSON document a settings layer reads.
///
/// Datetimes become strings. `nan` and `inf` have no JSON form and are
/// rejected; mapping them to `null` would read as "no value".
fn toml_to_json(toml: toml::Value) -> Result<Value, SettingsError> {
    let json = match toml {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(n) => Value::from(n),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| {
                SettingsError::ParseError(format!("TOML number {} has no JSON form", f))
            })?,
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(when) => Value::String(when.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| Ok((key, toml_to_json(value)?)))
                .collect::<Result<_, SettingsError>>()?,
        ),
    };
    Ok(json)
}
