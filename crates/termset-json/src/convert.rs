//! Conversion registry.
//!
//! A target type is registered by implementing [`JsonConvert`]. Dispatch is
//! resolved per type at compile time, so adding a type never touches the
//! extraction code in [`crate::extract`].

use serde_json::Value;
use uuid::Uuid;

use crate::error::JsonError;

/// Predicate + extractor pair for one target type.
pub trait JsonConvert: Sized {
    /// Whether `json` has the shape this type is extracted from.
    fn can_convert(json: &Value) -> bool;

    /// Produce the typed value. Only called when [`Self::can_convert`] holds.
    fn from_json(json: &Value) -> Result<Self, JsonError>;

    /// Value assigned for an explicit JSON `null`.
    ///
    /// `None` means the type has no null form and a `null` is treated as
    /// "no value present".
    fn from_null() -> Option<Self> {
        None
    }
}

impl JsonConvert for String {
    fn can_convert(json: &Value) -> bool {
        json.is_string()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_str().map(str::to_owned).ok_or(JsonError::TypeMismatch)
    }
}

impl JsonConvert for bool {
    fn can_convert(json: &Value) -> bool {
        json.is_boolean()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_bool().ok_or(JsonError::TypeMismatch)
    }
}

/// Integer content of a number, including integral reals such as `40.0`.
fn integral_i64(json: &Value) -> Option<i64> {
    if let Some(n) = json.as_i64() {
        return Some(n);
    }
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    json.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

/// Like [`integral_i64`], for non-negative values.
fn integral_u64(json: &Value) -> Option<u64> {
    if let Some(n) = json.as_u64() {
        return Some(n);
    }
    json.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
        .map(|f| f as u64)
}

impl JsonConvert for i32 {
    fn can_convert(json: &Value) -> bool {
        integral_i64(json).is_some_and(|n| i32::try_from(n).is_ok())
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        integral_i64(json)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(JsonError::TypeMismatch)
    }
}

impl JsonConvert for i64 {
    fn can_convert(json: &Value) -> bool {
        integral_i64(json).is_some()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        integral_i64(json).ok_or(JsonError::TypeMismatch)
    }
}

impl JsonConvert for u32 {
    fn can_convert(json: &Value) -> bool {
        integral_u64(json).is_some_and(|n| u32::try_from(n).is_ok())
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        integral_u64(json)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(JsonError::TypeMismatch)
    }
}

impl JsonConvert for u64 {
    fn can_convert(json: &Value) -> bool {
        integral_u64(json).is_some()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        integral_u64(json).ok_or(JsonError::TypeMismatch)
    }
}

impl JsonConvert for f32 {
    fn can_convert(json: &Value) -> bool {
        json.is_number()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_f64().map(|f| f as f32).ok_or(JsonError::TypeMismatch)
    }
}

impl JsonConvert for f64 {
    fn can_convert(json: &Value) -> bool {
        json.is_number()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        json.as_f64().ok_or(JsonError::TypeMismatch)
    }
}

/// GUIDs are written in the hyphenated 8-4-4-4-12 form, optionally wrapped
/// in braces (`{...}`).
impl JsonConvert for Uuid {
    fn can_convert(json: &Value) -> bool {
        json.is_string()
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        let text = json.as_str().ok_or(JsonError::TypeMismatch)?;
        let invalid = || JsonError::InvalidValue {
            expected: "GUID",
            value: text.to_string(),
        };

        let inner = match text.strip_prefix('{') {
            Some(rest) => rest.strip_suffix('}').ok_or_else(invalid)?,
            None => text,
        };
        if inner.len() != 36 {
            return Err(invalid());
        }
        Uuid::parse_str(inner).map_err(|_| invalid())
    }
}

/// Optional fields: `null` clears, anything else must satisfy `T`.
impl<T: JsonConvert> JsonConvert for Option<T> {
    fn can_convert(json: &Value) -> bool {
        json.is_null() || T::can_convert(json)
    }

    fn from_json(json: &Value) -> Result<Self, JsonError> {
        if json.is_null() {
            Ok(None)
        } else {
            T::from_json(json).map(Some)
        }
    }

    fn from_null() -> Option<Self> {
        Some(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_predicate() {
        assert!(String::can_convert(&json!("hello")));
        assert!(!String::can_convert(&json!(1)));
        assert_eq!(String::from_json(&json!("hello")).unwrap(), "hello");
    }

    #[test]
    fn test_bool_predicate() {
        assert!(bool::can_convert(&json!(true)));
        assert!(!bool::can_convert(&json!("true")));
        assert!(!bool::can_convert(&json!(1)));
    }

    #[test]
    fn test_i32_range() {
        assert!(i32::can_convert(&json!(-5)));
        assert!(!i32::can_convert(&json!(5_000_000_000i64)));
        assert!(!i32::can_convert(&json!(1.5)));
        assert_eq!(i32::from_json(&json!(-5)).unwrap(), -5);
    }

    #[test]
    fn test_integral_reals_convert() {
        assert!(i32::can_convert(&json!(40.0)));
        assert_eq!(i32::from_json(&json!(40.0)).unwrap(), 40);
        assert_eq!(i32::from_json(&json!(-3.0)).unwrap(), -3);
        assert_eq!(u32::from_json(&json!(7.0)).unwrap(), 7);
        assert_eq!(i64::from_json(&json!(1e3)).unwrap(), 1000);
        assert!(!u32::can_convert(&json!(-7.0)));
        assert!(!i32::can_convert(&json!(5e9)));
        assert!(!i64::can_convert(&json!(9.3e18)));
        assert!(matches!(i32::from_json(&json!(2.5)), Err(JsonError::TypeMismatch)));
    }

    #[test]
    fn test_u32_rejects_negative() {
        assert!(u32::can_convert(&json!(7)));
        assert!(!u32::can_convert(&json!(-7)));
    }

    #[test]
    fn test_floats_accept_any_number() {
        assert!(f64::can_convert(&json!(1)));
        assert!(f64::can_convert(&json!(1.25)));
        assert_eq!(f32::from_json(&json!(1.25)).unwrap(), 1.25f32);
        assert!(!f64::can_convert(&json!("1.0")));
    }

    #[test]
    fn test_guid_braced_and_bare() {
        let expected = Uuid::parse_str("61c54bbd-c2c6-5271-96e7-009a87ff44bf").unwrap();

        let bare = Uuid::from_json(&json!("61c54bbd-c2c6-5271-96e7-009a87ff44bf")).unwrap();
        let braced = Uuid::from_json(&json!("{61c54bbd-c2c6-5271-96e7-009a87ff44bf}")).unwrap();

        assert_eq!(bare, expected);
        assert_eq!(braced, expected);
    }

    #[test]
    fn test_guid_rejects_malformed_text() {
        let err = Uuid::from_json(&json!("{not-a-guid}")).unwrap_err();
        assert!(matches!(err, JsonError::InvalidValue { expected: "GUID", .. }));

        // simple (unhyphenated) form is not accepted
        assert!(Uuid::from_json(&json!("61c54bbdc2c6527196e7009a87ff44bf")).is_err());
    }

    #[test]
    fn test_option_accepts_null() {
        assert!(Option::<i32>::can_convert(&json!(null)));
        assert!(Option::<i32>::can_convert(&json!(3)));
        assert!(!Option::<i32>::can_convert(&json!("3")));
        assert_eq!(Option::<i32>::from_json(&json!(null)).unwrap(), None);
        assert_eq!(Option::<i32>::from_json(&json!(3)).unwrap(), Some(3));
        assert_eq!(Option::<i32>::from_null(), Some(None));
        assert_eq!(i32::from_null(), None);
    }
}
