//! Bindable actions and their arguments.

use serde_json::Value;
use termset_json::{get_value_for_key, impl_json_convert_for_mapping, EnumMapping, JsonConvert, JsonError};

use crate::warnings::{Warning, WarningKind};

const SINGLE_LINE_KEY: &str = "singleLine";
const PROFILE_KEY: &str = "profile";
const INDEX_KEY: &str = "index";
const DIRECTION_KEY: &str = "direction";
const SPLIT_KEY: &str = "split";

/// Pane/focus direction. `None` is the fallback for unknown tags and marks
/// a missing argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl EnumMapping for Direction {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("none", Direction::None),
        ("left", Direction::Left),
        ("right", Direction::Right),
        ("up", Direction::Up),
        ("down", Direction::Down),
    ];
}

/// Orientation of a new pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitStyle {
    #[default]
    None,
    Vertical,
    Horizontal,
    Automatic,
}

impl EnumMapping for SplitStyle {
    const MAPPINGS: &'static [(&'static str, Self)] = &[
        ("none", SplitStyle::None),
        ("vertical", SplitStyle::Vertical),
        ("horizontal", SplitStyle::Horizontal),
        ("auto", SplitStyle::Automatic),
    ];
}

impl_json_convert_for_mapping!(Direction, SplitStyle);

/// An action a key chord can be bound to, with its parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Copy { single_line: bool },
    Paste,
    NewTab { profile: Option<String>, index: Option<u32> },
    DuplicateTab,
    CloseWindow,
    CloseTab,
    ClosePane,
    NextTab,
    PrevTab,
    SwitchToTab { index: u32 },
    SplitPane { style: SplitStyle, profile: Option<String> },
    ResizePane { direction: Direction },
    MoveFocus { direction: Direction },
    ScrollUp,
    ScrollDown,
    ScrollUpPage,
    ScrollDownPage,
    IncreaseFontSize,
    DecreaseFontSize,
    ResetFontSize,
    ToggleFullscreen,
    OpenSettings,
    Find,
}

/// Action tags accepted in `command`.
pub const ACTION_TAGS: &[&str] = &[
    "copy",
    "paste",
    "newTab",
    "duplicateTab",
    "closeWindow",
    "closeTab",
    "closePane",
    "nextTab",
    "prevTab",
    "switchToTab",
    "splitPane",
    "resizePane",
    "moveFocus",
    "scrollUp",
    "scrollDown",
    "scrollUpPage",
    "scrollDownPage",
    "increaseFontSize",
    "decreaseFontSize",
    "resetFontSize",
    "toggleFullscreen",
    "openSettings",
    "find",
];

/// Tag that removes a binding instead of adding one.
pub const UNBOUND_TAG: &str = "unbound";

fn missing_parameter(tag: &str, parameter: &str) -> Warning {
    Warning::new(
        WarningKind::MissingRequiredParameter,
        format!("action \"{}\" requires \"{}\"", tag, parameter),
    )
}

fn malformed_argument(tag: &str, err: JsonError) -> Warning {
    Warning::new(
        WarningKind::MalformedBinding,
        format!("action \"{}\": {}", tag, err),
    )
}

/// Read an optional argument; a conversion error makes the binding malformed.
fn read_arg<T: JsonConvert>(tag: &str, args: &Value, key: &str, target: &mut T) -> Result<(), Warning> {
    get_value_for_key(args, key, target)
        .map(|_| ())
        .map_err(|err| malformed_argument(tag, err))
}

fn required_direction(tag: &str, args: &Value) -> Result<Direction, Warning> {
    let mut direction = Direction::None;
    read_arg(tag, args, DIRECTION_KEY, &mut direction)?;
    if direction == Direction::None {
        return Err(missing_parameter(tag, DIRECTION_KEY));
    }
    Ok(direction)
}

impl Action {
    /// Build the action named `tag`, reading its arguments from `args`
    /// (the command object, or `null` when the command was a bare string).
    pub fn from_tag(tag: &str, args: &Value) -> Result<Self, Warning> {
        let action = match tag {
            "copy" => {
                let mut single_line = false;
                read_arg(tag, args, SINGLE_LINE_KEY, &mut single_line)?;
                Action::Copy { single_line }
            }
            "paste" => Action::Paste,
            "newTab" => {
                let mut profile = None;
                let mut index = None;
                read_arg(tag, args, PROFILE_KEY, &mut profile)?;
                read_arg(tag, args, INDEX_KEY, &mut index)?;
                Action::NewTab { profile, index }
            }
            "duplicateTab" => Action::DuplicateTab,
            "closeWindow" => Action::CloseWindow,
            "closeTab" => Action::CloseTab,
            "closePane" => Action::ClosePane,
            "nextTab" => Action::NextTab,
            "prevTab" => Action::PrevTab,
            "switchToTab" => {
                let mut index: Option<u32> = None;
                read_arg(tag, args, INDEX_KEY, &mut index)?;
                let index = index.ok_or_else(|| missing_parameter(tag, INDEX_KEY))?;
                Action::SwitchToTab { index }
            }
            "splitPane" => {
                let mut style = SplitStyle::None;
                let mut profile = None;
                read_arg(tag, args, SPLIT_KEY, &mut style)?;
                read_arg(tag, args, PROFILE_KEY, &mut profile)?;
                if style == SplitStyle::None {
                    return Err(missing_parameter(tag, SPLIT_KEY));
                }
                Action::SplitPane { style, profile }
            }
            "resizePane" => Action::ResizePane {
                direction: required_direction(tag, args)?,
            },
            "moveFocus" => Action::MoveFocus {
                direction: required_direction(tag, args)?,
            },
            "scrollUp" => Action::ScrollUp,
            "scrollDown" => Action::ScrollDown,
            "scrollUpPage" => Action::ScrollUpPage,
            "scrollDownPage" => Action::ScrollDownPage,
            "increaseFontSize" => Action::IncreaseFontSize,
            "decreaseFontSize" => Action::DecreaseFontSize,
            "resetFontSize" => Action::ResetFontSize,
            "toggleFullscreen" => Action::ToggleFullscreen,
            "openSettings" => Action::OpenSettings,
            "find" => Action::Find,
            _ => {
                return Err(Warning::new(
                    WarningKind::UnknownAction,
                    format!("unknown action \"{}\"", tag),
                ))
            }
        };
        Ok(action)
    }
}
