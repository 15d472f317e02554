//! Enum-valued global settings.

use termset_json::{impl_json_convert_for_mapping, EnumMapping};

/// Application color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementTheme {
    /// Follow the system theme.
    #[default]
    Default,
    Light,
    Dark,
}

impl EnumMapping for ElementTheme {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("system", ElementTheme::Default),
        ("light", ElementTheme::Light),
        ("dark", ElementTheme::Dark),
    ];
}

/// Initial window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    #[default]
    DefaultMode,
    MaximizedMode,
}

impl EnumMapping for LaunchMode {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("default", LaunchMode::DefaultMode),
        ("maximized", LaunchMode::MaximizedMode),
    ];
}

/// How tab headers are sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabWidthMode {
    #[default]
    Equal,
    /// Each tab is as wide as its title.
    SizeToContent,
}

impl EnumMapping for TabWidthMode {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("equal", TabWidthMode::Equal),
        ("titleLength", TabWidthMode::SizeToContent),
    ];
}

impl_json_convert_for_mapping!(ElementTheme, LaunchMode, TabWidthMode);
