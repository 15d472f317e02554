//! Initial window position, written as `"X,Y"`.
//!
//! Either coordinate may be left out or be garbage, in which case it stays
//! unset and the window manager picks it:
//!
//! | input           | x    | y    |
//! |-----------------|------|------|
//! | `"100,100"`     | 100  | 100  |
//! | `",100"`        | -    | 100  |
//! | `"100,"`        | 100  | -    |
//! | `","`           | -    | -    |
//! | `"abc,100"`     | -    | 100  |
//! | `"100,100,100"` | 100  | 100  |

use serde_json::Value;
use termset_json::{JsonConvert, JsonError};

/// Only the first two comma-separated tokens are read.
const MAX_COORDINATES: usize = 2;

/// A pair of independently optional window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchPosition {
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl LaunchPosition {
    /// Parse `"X,Y"`. Never fails; unparseable coordinates are left unset.
    pub fn parse(text: &str) -> Self {
        let mut position = LaunchPosition::default();
        for (index, token) in text.split(',').take(MAX_COORDINATES).enumerate() {
            let coordinate = parse_leading_int(token);
            match index {
                0 => position.x = coordinate,
                _ => position.y = coordinate,
            }
        }
        position
    }
}

/// Parse a signed integer prefix the way C's `stoi` does: leading
/// whitespace is skipped, an optional sign is accepted, and parsing stops at
/// the first non-digit. No digits, or a value outside `i32`, yields `None`.
fn parse_leading_int(token: &str) -> Option<i32> {
    let trimmed = token.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digit_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digit_len == 0 {
        return None;
    }

    trimmed[..sign_len + digit_len].parse().ok()
}

impl JsonConvert for LaunchPosition {
    fn can_convert(json: &Value) -> bool {
        json.is_string()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_str()
            .map(LaunchPosition::parse)
            .ok_or(JsonError::TypeMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pos(x: Option<i32>, y: Option<i32>) -> LaunchPosition {
        LaunchPosition { x, y }
    }

    #[test]
    fn test_both_coordinates() {
        assert_eq!(LaunchPosition::parse("100,100"), pos(Some(100), Some(100)));
    }

    #[test]
    fn test_missing_x() {
        assert_eq!(LaunchPosition::parse(",100"), pos(None, Some(100)));
    }

    #[test]
    fn test_missing_y() {
        assert_eq!(LaunchPosition::parse("100,"), pos(Some(100), None));
    }

    #[test]
    fn test_both_missing() {
        assert_eq!(LaunchPosition::parse(","), pos(None, None));
        assert_eq!(LaunchPosition::parse(""), pos(None, None));
    }

    #[test]
    fn test_garbage_coordinate() {
        assert_eq!(LaunchPosition::parse("abc,100"), pos(None, Some(100)));
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(
            LaunchPosition::parse("100,100,100"),
            pos(Some(100), Some(100))
        );
        assert_eq!(LaunchPosition::parse("1,2,abc"), pos(Some(1), Some(2)));
    }

    #[test]
    fn test_single_coordinate() {
        assert_eq!(LaunchPosition::parse("250"), pos(Some(250), None));
    }

    #[test]
    fn test_negative_and_whitespace() {
        assert_eq!(LaunchPosition::parse("-50, 20"), pos(Some(-50), Some(20)));
        assert_eq!(LaunchPosition::parse("+5,-0"), pos(Some(5), Some(0)));
    }

    #[test]
    fn test_numeric_prefix_is_kept() {
        assert_eq!(LaunchPosition::parse("100px,7.5"), pos(Some(100), Some(7)));
    }

    #[test]
    fn test_rejects_double_sign_and_overflow() {
        assert_eq!(LaunchPosition::parse("--5,99999999999"), pos(None, None));
        assert_eq!(LaunchPosition::parse("-,+"), pos(None, None));
    }

    #[test]
    fn test_json_predicate() {
        assert!(LaunchPosition::can_convert(&json!("1,2")));
        assert!(!LaunchPosition::can_convert(&json!([1, 2])));
        assert_eq!(
            LaunchPosition::from_json(&json!(",8")).unwrap(),
            pos(None, Some(8))
        );
    }
}
