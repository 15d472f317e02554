//! Global application settings.
//!
//! [`GlobalAppSettings`] starts from hard-coded defaults and is then mutated
//! in place by each settings layer through [`GlobalAppSettings::layer_json`].
//! Merging is flat and per-field: a key present in a layer overwrites the
//! field, a key absent from it leaves the field alone. The keybinding table
//! and the color schemes are merged by their own routines.

mod enums;
pub mod keys;
mod position;

pub use enums::{ElementTheme, LaunchMode, TabWidthMode};
pub use position::LaunchPosition;

use serde_json::Value;
use termset_json::{get_values_for_keys, with_key, JsonConvert, JsonError, Uuid, WideString};

use crate::keybindings::KeyBindings;
use crate::schemes::{ColorScheme, ColorSchemes};
use crate::warnings::{Warning, WarningKind};

pub const DEFAULT_ROWS: i32 = 30;
pub const DEFAULT_COLS: i32 = 120;

/// `0` means "use the system scroll setting".
pub const DEFAULT_ROWS_TO_SCROLL: i32 = 0;

pub const DEFAULT_WORD_DELIMITERS: &str = " /\\()\"'-.,:;<>~!@#$%^&*|+=[]{}~?\u{2502}";

/// Settings that apply to the whole application rather than one profile.
#[derive(Debug, Clone)]
pub struct GlobalAppSettings {
    pub default_profile: Uuid,
    pub always_show_tabs: bool,
    pub confirm_close_all_tabs: bool,
    pub initial_rows: i32,
    pub initial_cols: i32,
    pub rows_to_scroll: i32,
    pub initial_position: LaunchPosition,
    pub show_title_in_titlebar: bool,
    pub show_tabs_in_titlebar: bool,
    pub word_delimiters: WideString,
    pub copy_on_select: bool,
    pub copy_formatting: bool,
    pub launch_mode: LaunchMode,
    pub theme: ElementTheme,
    pub tab_width_mode: TabWidthMode,
    pub snap_to_grid_on_resize: bool,
    pub debug_features: bool,

    key_bindings: KeyBindings,
    color_schemes: ColorSchemes,
    warnings: Vec<Warning>,
}

impl GlobalAppSettings {
    /// Settings holding only the built-in defaults.
    ///
    /// `debug_features` is the default for the `debugFeatures` key; builds
    /// meant for development usually pass `true`.
    pub fn new(debug_features: bool) -> Self {
        Self {
            default_profile: Uuid::nil(),
            always_show_tabs: true,
            confirm_close_all_tabs: true,
            initial_rows: DEFAULT_ROWS,
            initial_cols: DEFAULT_COLS,
            rows_to_scroll: DEFAULT_ROWS_TO_SCROLL,
            initial_position: LaunchPosition::default(),
            show_title_in_titlebar: true,
            show_tabs_in_titlebar: true,
            word_delimiters: WideString::from(DEFAULT_WORD_DELIMITERS),
            copy_on_select: false,
            copy_formatting: false,
            launch_mode: LaunchMode::default(),
            theme: ElementTheme::default(),
            tab_width_mode: TabWidthMode::default(),
            snap_to_grid_on_resize: true,
            debug_features,
            key_bindings: KeyBindings::new(),
            color_schemes: ColorSchemes::new(),
            warnings: Vec::new(),
        }
    }

    /// Defaults with a single document layered on top.
    pub fn from_json(json: &Value, debug_features: bool) -> Result<Self, JsonError> {
        let mut settings = Self::new(debug_features);
        settings.layer_json(json)?;
        Ok(settings)
    }

    /// Apply one settings layer.
    ///
    /// Keys are applied in a fixed order and the first fatal error stops the
    /// layer. Fields applied before the error keep their new values, and
    /// warnings raised before it are kept.
    pub fn layer_json(&mut self, json: &Value) -> Result<(), JsonError> {
        match json.get(keys::LEGACY_GLOBALS) {
            None | Some(Value::Null) => {}
            Some(legacy @ Value::Object(_)) => {
                self.warnings.push(Warning::new(
                    WarningKind::LegacyGlobalsProperty,
                    "settings under \"globals\" should be moved to the top level",
                ));
                with_key(keys::LEGACY_GLOBALS, self.layer_json(legacy))?;
            }
            Some(_) => return Err(JsonError::TypeMismatch.with_key(keys::LEGACY_GLOBALS)),
        }

        get_values_for_keys!(
            json,
            keys::DEFAULT_PROFILE => &mut self.default_profile,
            keys::ALWAYS_SHOW_TABS => &mut self.always_show_tabs,
            keys::CONFIRM_CLOSE_ALL_TABS => &mut self.confirm_close_all_tabs,
            keys::INITIAL_ROWS => &mut self.initial_rows,
            keys::INITIAL_COLS => &mut self.initial_cols,
        )?;

        self.layer_rows_to_scroll(json);

        get_values_for_keys!(
            json,
            keys::INITIAL_POSITION => &mut self.initial_position,
            keys::SHOW_TITLE_IN_TITLEBAR => &mut self.show_title_in_titlebar,
            keys::SHOW_TABS_IN_TITLEBAR => &mut self.show_tabs_in_titlebar,
            keys::WORD_DELIMITERS => &mut self.word_delimiters,
            keys::COPY_ON_SELECT => &mut self.copy_on_select,
            keys::COPY_FORMATTING => &mut self.copy_formatting,
            keys::LAUNCH_MODE => &mut self.launch_mode,
            keys::THEME => &mut self.theme,
            keys::TAB_WIDTH_MODE => &mut self.tab_width_mode,
            keys::SNAP_TO_GRID_ON_RESIZE => &mut self.snap_to_grid_on_resize,
            keys::DEBUG_FEATURES => &mut self.debug_features,
        )?;

        if let Some(bindings) = json.get(keys::KEYBINDINGS).filter(|v| !v.is_null()) {
            let warnings = with_key(keys::KEYBINDINGS, self.key_bindings.layer_json(bindings))?;
            self.warnings.extend(warnings);
        }

        if let Some(schemes) = json.get(keys::SCHEMES).filter(|v| !v.is_null()) {
            with_key(keys::SCHEMES, self.color_schemes.layer_json(schemes))?;
        }

        Ok(())
    }

    /// `rowsToScroll` takes an integer (`5.0` counts); any other non-null value (such as
    /// `"system"`) means "use the system setting" and is stored as 0.
    fn layer_rows_to_scroll(&mut self, json: &Value) {
        let Some(rows) = json.get(keys::ROWS_TO_SCROLL).filter(|v| !v.is_null()) else {
            return;
        };
        self.rows_to_scroll = i32::from_json(rows).unwrap_or(DEFAULT_ROWS_TO_SCROLL);
    }

    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    pub fn color_schemes(&self) -> &ColorSchemes {
        &self.color_schemes
    }

    /// Insert a scheme, replacing any scheme with the same name.
    pub fn add_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_schemes.insert(scheme);
    }

    /// Warnings collected by every layer applied so far, in order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Hand the collected warnings to the caller.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}
