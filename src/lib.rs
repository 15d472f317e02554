//! termset - layered terminal settings
//!
//! This crate loads a terminal emulator's global settings from a stack of
//! JSON documents. Each layer overwrites only the keys it names; keybindings
//! and color schemes are merged by their own rules. Recoverable problems
//! are collected as [`Warning`]s, and fatal ones are reported as a
//! [`SettingsError`] carrying the dotted key path of the offending value.

pub mod error;
pub mod keybindings;
pub mod layer;
pub mod loader;
pub mod schemes;
pub mod settings;
pub mod warnings;

pub use error::SettingsError;
pub use keybindings::{Action, KeyBindings, KeyChord};
pub use layer::{Layer, LayerOrigin, LayerSource};
pub use loader::{load_settings, LoadReport, LoadedSettings, SettingsLoader};
pub use schemes::{ColorScheme, ColorSchemes};
pub use settings::GlobalAppSettings;
pub use warnings::{Warning, WarningKind};

pub use termset_json::{Color, JsonError, Uuid, WideString};
