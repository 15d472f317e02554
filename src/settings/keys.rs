//! JSON keys recognized in a settings layer.

pub const DEFAULT_PROFILE: &str = "defaultProfile";
pub const ALWAYS_SHOW_TABS: &str = "alwaysShowTabs";
pub const CONFIRM_CLOSE_ALL_TABS: &str = "confirmCloseAllTabs";
pub const INITIAL_ROWS: &str = "initialRows";
pub const INITIAL_COLS: &str = "initialCols";
pub const ROWS_TO_SCROLL: &str = "rowsToScroll";
pub const INITIAL_POSITION: &str = "initialPosition";
pub const SHOW_TITLE_IN_TITLEBAR: &str = "showTerminalTitleInTitlebar";
pub const SHOW_TABS_IN_TITLEBAR: &str = "showTabsInTitlebar";
pub const WORD_DELIMITERS: &str = "wordDelimiters";
pub const COPY_ON_SELECT: &str = "copyOnSelect";
pub const COPY_FORMATTING: &str = "copyFormatting";
pub const LAUNCH_MODE: &str = "launchMode";
pub const THEME: &str = "theme";
pub const TAB_WIDTH_MODE: &str = "tabWidthMode";
pub const SNAP_TO_GRID_ON_RESIZE: &str = "snapToGridOnResize";
pub const DEBUG_FEATURES: &str = "debugFeatures";
pub const KEYBINDINGS: &str = "keybindings";
pub const SCHEMES: &str = "schemes";

/// Deprecated container that older settings files wrapped globals in.
pub const LEGACY_GLOBALS: &str = "globals";
