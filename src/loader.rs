//! Layered settings loading.
//!
//! Layers are applied in order onto one [`GlobalAppSettings`]: packaged
//! defaults first, then the user's file, then anything else the caller has.
//! Each successfully applied layer is recorded so the result carries its
//! provenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SettingsError;
use crate::layer::{Layer, LayerOrigin, LayerSource};
use crate::settings::GlobalAppSettings;
use crate::warnings::Warning;

/// What a load produced besides the settings themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// When loading finished
    pub loaded_at: DateTime<Utc>,

    /// Layers that were applied, in precedence order
    pub sources: Vec<LayerSource>,

    /// Recoverable problems, in the order they were found
    pub warnings: Vec<Warning>,

    /// Fatal error that stopped loading, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoadReport {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Settings after every layer has been applied, or after loading stopped.
///
/// When a layer fails, `settings` still holds every earlier layer plus the
/// part of the failing layer applied before the error, and the warnings
/// found up to that point are in the report.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: GlobalAppSettings,
    pub report: LoadReport,
    pub error: Option<SettingsError>,
}

impl LoadedSettings {
    /// Whether every layer was applied.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Applies layers to one settings aggregate.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: GlobalAppSettings,
    sources: Vec<LayerSource>,
}

impl SettingsLoader {
    pub fn new(debug_features: bool) -> Self {
        Self {
            settings: GlobalAppSettings::new(debug_features),
            sources: Vec::new(),
        }
    }

    /// Apply one layer.
    ///
    /// On error the settings keep whatever the layer changed before the
    /// failing key, and the layer is not recorded as a source.
    pub fn apply(&mut self, layer: &Layer) -> Result<(), SettingsError> {
        let warnings_before = self.settings.warnings().len();
        tracing::debug!(origin = ?layer.origin(), path = ?layer.source().path, "applying settings layer");

        let result = self.settings.layer_json(layer.document());

        for warning in &self.settings.warnings()[warnings_before..] {
            tracing::warn!(kind = %warning.kind, detail = %warning.detail, "settings warning");
        }

        if let Err(err) = result {
            tracing::error!(origin = ?layer.origin(), error = %err, "settings layer rejected");
            return Err(err.into());
        }

        self.sources.push(layer.source().clone());
        Ok(())
    }

    /// Apply layers in order, stopping at the first fatal error.
    pub fn apply_all<'a>(
        &mut self,
        layers: impl IntoIterator<Item = &'a Layer>,
    ) -> Result<(), SettingsError> {
        for layer in layers {
            self.apply(layer)?;
        }
        Ok(())
    }

    pub fn settings(&self) -> &GlobalAppSettings {
        &self.settings
    }

    pub fn sources(&self) -> &[LayerSource] {
        &self.sources
    }

    pub fn finish(self) -> LoadedSettings {
        self.finish_with(None)
    }

    /// Finish a load that was stopped by `error`, keeping what was applied.
    pub fn finish_with_error(self, error: SettingsError) -> LoadedSettings {
        self.finish_with(Some(error))
    }

    fn finish_with(mut self, error: Option<SettingsError>) -> LoadedSettings {
        let warnings = self.settings.take_warnings();
        LoadedSettings {
            settings: self.settings,
            report: LoadReport {
                loaded_at: Utc::now(),
                sources: self.sources,
                warnings,
                error: error.as_ref().map(ToString::to_string),
            },
            error,
        }
    }
}

/// Load the packaged defaults, then the user's settings file if it exists.
///
/// A fatal error stops loading but does not discard it: the result carries
/// the error next to the settings and warnings gathered before it.
pub fn load_settings(user_path: Option<&Path>, debug_features: bool) -> LoadedSettings {
    let mut loader = SettingsLoader::new(debug_features);
    match apply_standard_layers(&mut loader, user_path) {
        Ok(()) => loader.finish(),
        Err(err) => {
            tracing::error!(error = %err, "settings load stopped early");
            loader.finish_with_error(err)
        }
    }
}

fn apply_standard_layers(
    loader: &mut SettingsLoader,
    user_path: Option<&Path>,
) -> Result<(), SettingsError> {
    loader.apply(&Layer::packaged_defaults()?)?;

    if let Some(path) = user_path {
        if path.exists() {
            loader.apply(&Layer::load(LayerOrigin::User, path)?)?;
        } else {
            tracing::info!(path = %path.display(), "no user settings file, using defaults");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::WarningKind;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use termset_json::JsonError;

    #[test]
    fn test_packaged_defaults_load_cleanly() {
        let mut loader = SettingsLoader::new(false);
        loader.apply(&Layer::packaged_defaults().unwrap()).unwrap();

        let settings = loader.settings();
        assert!(settings.warnings().is_empty());
        assert!(settings.color_schemes().contains("Campbell"));
        assert!(settings.color_schemes().contains("One Half Dark"));
        assert!(settings.key_bindings().get_by_keys("ctrl+shift+c").is_some());
        assert_eq!(loader.sources().len(), 1);
        assert_eq!(loader.sources()[0].origin, LayerOrigin::Defaults);
    }

    #[test]
    fn test_layers_apply_in_order() {
        let defaults = Layer::new(LayerOrigin::Defaults, json!({ "initialRows": 20, "theme": "light" }));
        let user = Layer::new(LayerOrigin::User, json!({ "initialRows": 40 }));

        let mut loader = SettingsLoader::new(false);
        loader.apply_all([&defaults, &user]).unwrap();
        let loaded = loader.finish();

        assert_eq!(loaded.settings.initial_rows, 40);
        assert_eq!(loaded.settings.theme, crate::settings::ElementTheme::Light);
        let origins: Vec<LayerOrigin> = loaded.report.sources.iter().map(|s| s.origin).collect();
        assert_eq!(origins, vec![LayerOrigin::Defaults, LayerOrigin::User]);
    }

    #[test]
    fn test_failed_layer_not_recorded() {
        let good = Layer::new(LayerOrigin::Defaults, json!({}));
        let bad = Layer::new(LayerOrigin::User, json!({ "initialCols": 90, "initialRows": "tall" }));
        let never = Layer::new(LayerOrigin::Inline, json!({ "initialCols": 10 }));

        let mut loader = SettingsLoader::new(false);
        let err = loader.apply_all([&good, &bad, &never]).unwrap_err();

        match err {
            SettingsError::Json(json_err) => {
                assert_eq!(json_err.key_path().as_deref(), Some("initialRows"));
                assert!(matches!(json_err.root_cause(), JsonError::TypeMismatch));
            }
            other => panic!("unexpected error: {other}"),
        }
        // partial application is kept, the later layer never ran
        assert_eq!(loader.settings().initial_cols, 90);
        assert_eq!(loader.sources().len(), 1);
    }

    #[test]
    fn test_finish_moves_warnings_into_report() {
        let layer = Layer::new(
            LayerOrigin::User,
            json!({ "keybindings": [{ "command": "nope", "keys": "ctrl+q" }] }),
        );
        let mut loader = SettingsLoader::new(false);
        loader.apply(&layer).unwrap();
        let loaded = loader.finish();

        assert_eq!(loaded.report.warnings.len(), 1);
        assert_eq!(loaded.report.warnings[0].kind, WarningKind::UnknownAction);
        assert!(loaded.settings.warnings().is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let loaded = SettingsLoader::new(false).finish();
        let json: serde_json::Value = serde_json::from_str(&loaded.report.to_json().unwrap()).unwrap();
        assert!(json["loaded_at"].is_string());
        assert_eq!(json["sources"], json!([]));
        assert_eq!(json["warnings"], json!([]));
        assert!(json.get("error").is_none());

        let failed = SettingsLoader::new(false)
            .finish_with_error(SettingsError::IoError("settings.json: denied".to_string()));
        let json: serde_json::Value = serde_json::from_str(&failed.report.to_json().unwrap()).unwrap();
        assert_eq!(json["error"], "IO error: settings.json: denied");
    }

    #[test]
    fn test_load_settings_with_user_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, r##"{{"initialCols": 100, "schemes": [{{"name": "Campbell", "background": "#000000"}}]}}"##)
            .unwrap();

        let loaded = load_settings(Some(temp.path()), false);

        assert!(loaded.is_complete());
        assert_eq!(loaded.settings.initial_cols, 100);
        let campbell = loaded.settings.color_schemes().get("Campbell").unwrap();
        assert_eq!(campbell.background.to_string(), "#000000");
        assert_eq!(loaded.report.sources.len(), 2);
        assert!(loaded.report.sources[1].digest.is_some());
    }

    #[test]
    fn test_load_settings_missing_user_file() {
        let loaded = load_settings(Some(Path::new("/nonexistent/settings.json")), true);
        assert!(loaded.is_complete());
        assert!(loaded.settings.debug_features);
        assert_eq!(loaded.report.sources.len(), 1);
    }

    #[test]
    fn test_load_settings_keeps_state_after_user_error() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(
            temp,
            r#"{{"keybindings": [{{"command": "nope", "keys": "ctrl+q"}}], "schemes": [{{"name": "X", "foreground": 12}}]}}"#
        )
        .unwrap();

        let loaded = load_settings(Some(temp.path()), false);

        assert!(!loaded.is_complete());
        match loaded.error.as_ref() {
            Some(SettingsError::Json(err)) => {
                assert_eq!(err.key_path().as_deref(), Some("schemes.foreground"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            loaded.report.error.as_deref(),
            Some("error parsing \"schemes.foreground\": invalid type")
        );

        // the defaults layer is still in effect
        assert_eq!(loaded.report.sources.len(), 1);
        assert!(loaded.settings.color_schemes().contains("Campbell"));
        assert!(loaded.settings.key_bindings().get_by_keys("ctrl+shift+v").is_some());
        assert!(!loaded.settings.color_schemes().contains("X"));

        // and the warning found before the error reaches the caller
        let kinds: Vec<WarningKind> = loaded.report.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::UnknownAction]);
    }

    #[test]
    fn test_load_settings_scalar_error_keeps_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, r#"{{"initialRows": 50, "initialCols": "wide"}}"#).unwrap();

        let loaded = load_settings(Some(temp.path()), false);

        assert_eq!(
            loaded.report.error.as_deref(),
            Some("error parsing \"initialCols\": invalid type")
        );
        assert_eq!(loaded.settings.initial_rows, 50);
        assert_eq!(loaded.settings.initial_cols, 120);
        assert!(loaded.settings.key_bindings().get_by_keys("ctrl+shift+c").is_some());
    }

    #[test]
    fn test_load_settings_unreadable_user_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "{{ not json").unwrap();

        let loaded = load_settings(Some(temp.path()), false);

        assert!(matches!(loaded.error, Some(SettingsError::ParseError(_))));
        assert_eq!(loaded.report.sources.len(), 1);
        assert!(loaded.settings.color_schemes().contains("One Half Dark"));
    }
}
