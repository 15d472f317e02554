//! Fatal conversion errors.

use thiserror::Error;

/// Errors raised while converting a JSON value into a typed field.
///
/// All variants are fatal for the document being applied. Recoverable,
/// per-entry problems are reported as warnings by the callers instead.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value exists but its JSON kind does not satisfy the target type.
    #[error("invalid type")]
    TypeMismatch,

    /// The value has the right kind but its content could not be parsed.
    #[error("invalid {expected}: {value:?}")]
    InvalidValue {
        /// Human-readable name of the expected format.
        expected: &'static str,
        /// The offending raw text.
        value: String,
    },

    /// A required key was absent from the document.
    #[error("missing required field \"{key}\"")]
    MissingRequiredField { key: String },

    /// An inner error annotated with the keys traversed to reach it,
    /// outermost first.
    #[error("error parsing \"{}\": {source}", .path.join("."))]
    Keyed {
        path: Vec<String>,
        #[source]
        source: Box<JsonError>,
    },
}

impl JsonError {
    /// Prepend `key` to this error's key path.
    ///
    /// Errors that already carry a path are extended in place so that a
    /// failure nested several objects deep renders as one dotted path.
    pub fn with_key(self, key: &str) -> Self {
        match self {
            JsonError::Keyed { mut path, source } => {
                path.insert(0, key.to_string());
                JsonError::Keyed { path, source }
            }
            other => JsonError::Keyed {
                path: vec![key.to_string()],
                source: Box::new(other),
            },
        }
    }

    /// Dotted key path, if the error crossed at least one key boundary.
    pub fn key_path(&self) -> Option<String> {
        match self {
            JsonError::Keyed { path, .. } => Some(path.join(".")),
            _ => None,
        }
    }

    /// The innermost, unkeyed cause.
    pub fn root_cause(&self) -> &JsonError {
        match self {
            JsonError::Keyed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
