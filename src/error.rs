//! Errors surfaced by settings loading.

use termset_json::JsonError;

/// Fatal settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A layer had a value that could not be converted; the layer was
    /// abandoned part-way.
    #[error(transparent)]
    Json(#[from] JsonError),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
