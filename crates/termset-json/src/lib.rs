//! Typed JSON value extraction.
//!
//! Every supported target type implements [`JsonConvert`], a predicate that
//! decides whether a raw value has the right shape and an extractor that
//! produces the typed value. The free functions in [`extract`] build the
//! get/require operations used to layer JSON documents onto settings
//! records, with explicit null-vs-missing semantics and dotted key paths on
//! errors.

pub mod color;
pub mod convert;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod wide;

pub use color::Color;
pub use convert::JsonConvert;
pub use error::JsonError;
pub use extract::{get_required_value_for_key, get_value, get_value_for_key, with_key};
pub use mapping::EnumMapping;
pub use wide::WideString;

pub use serde_json::Value;
pub use uuid::Uuid;
