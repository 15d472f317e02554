//! Get/require operations over the conversion registry.
//!
//! Absence comes in two flavors:
//! - a key that is not in the document: the document did not speak to the
//!   field and the target is left alone;
//! - an explicit `null`: clears optional targets, and is treated as "no
//!   value" for targets that have no null form.

use serde_json::Value;

use crate::convert::JsonConvert;
use crate::error::JsonError;

/// Convert `json` into `target`.
///
/// Returns `Ok(false)` without touching `target` when there is no value.
/// Raises [`JsonError::TypeMismatch`] when the value fails the target type's
/// predicate; the extractor is not run in that case.
pub fn get_value<T: JsonConvert>(json: Option<&Value>, target: &mut T) -> Result<bool, JsonError> {
    let Some(json) = json else {
        return Ok(false);
    };

    if json.is_null() {
        return Ok(match T::from_null() {
            Some(cleared) => {
                *target = cleared;
                true
            }
            None => false,
        });
    }

    if !T::can_convert(json) {
        return Err(JsonError::TypeMismatch);
    }

    *target = T::from_json(json)?;
    Ok(true)
}

/// Convert the value stored under `key` into `target`.
///
/// A missing key (or a `json` that is not an object) is not an error. Any
/// conversion error is re-raised with `key` prepended to its key path.
pub fn get_value_for_key<T: JsonConvert>(
    json: &Value,
    key: &str,
    target: &mut T,
) -> Result<bool, JsonError> {
    match json.get(key) {
        Some(found) => with_key(key, get_value(Some(found), target)),
        None => Ok(false),
    }
}

/// Like [`get_value_for_key`], but a key without a value is an error.
pub fn get_required_value_for_key<T: JsonConvert>(
    json: &Value,
    key: &str,
    target: &mut T,
) -> Result<(), JsonError> {
    if get_value_for_key(json, key, target)? {
        Ok(())
    } else {
        Err(JsonError::MissingRequiredField {
            key: key.to_string(),
        })
    }
}

/// Prepend `key` to the error path of `result`, if it failed.
///
/// Used by nested collections whose entries are converted by their own
/// routines rather than through [`get_value_for_key`].
pub fn with_key<T>(key: &str, result: Result<T, JsonError>) -> Result<T, JsonError> {
    result.map_err(|e| e.with_key(key))
}

/// Apply [`get_value_for_key`] to each `key => target` pair in order.
///
/// Missing keys are skipped. The first error stops the batch; targets of
/// earlier keys keep their new values.
///
/// ```
/// use serde_json::json;
/// use termset_json::get_values_for_keys;
///
/// let doc = json!({ "rows": 40, "title": "main" });
/// let mut rows = 30;
/// let mut cols = 120;
/// let mut title = String::new();
///
/// get_values_for_keys!(&doc, "rows" => &mut rows, "cols" => &mut cols, "title" => &mut title)
///     .unwrap();
/// assert_eq!((rows, cols, title.as_str()), (40, 120, "main"));
/// ```
#[macro_export]
macro_rules! get_values_for_keys {
    ($json:expr $(, $key:expr => $target:expr)* $(,)?) => {{
        let json: &$crate::Value = $json;
        ::std::result::Result::<(), $crate::JsonError>::Ok(())
            $(.and_then(|()| $crate::get_value_for_key(json, $key, $target).map(|_| ())))*
    }};
}
