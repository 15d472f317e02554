//! String-tag enum mappings.
//!
//! An enum converts from a JSON string by looking its tag up in an ordered
//! table. The first entry is the fallback: an unrecognized tag yields that
//! value instead of an error.

/// Ordered tag table for an enum-like type.
pub trait EnumMapping: Copy + 'static {
    /// `(tag, value)` pairs. Must be non-empty; the first pair is the fallback.
    const MAPPINGS: &'static [(&'static str, Self)];

    /// Compile-time check that [`Self::MAPPINGS`] has a fallback entry.
    /// Referenced by [`Self::from_tag`], so an empty table fails to build
    /// for any type whose lookup is used. Not meant to be overridden.
    const HAS_FALLBACK: () = assert!(
        !Self::MAPPINGS.is_empty(),
        "enum mapping needs a fallback entry"
    );

    /// Exact-match lookup, falling back to the first entry.
    fn from_tag(tag: &str) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_FALLBACK;

        match Self::MAPPINGS.iter().find(|(name, _)| *name == tag) {
            Some((_, value)) => *value,
            None => {
                // cannot be out of bounds, HAS_FALLBACK rejects empty tables
                let (fallback_tag, fallback) = Self::MAPPINGS[0];
                tracing::debug!(tag, fallback = fallback_tag, "unrecognized tag, using fallback");
                fallback
            }
        }
    }

    /// Tag for `self`, if it appears in the table.
    fn tag(self) -> Option<&'static str>
    where
        Self: PartialEq,
    {
        Self::MAPPINGS
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(name, _)| *name)
    }
}

/// Implement [`JsonConvert`](crate::JsonConvert) for types that implement
/// [`EnumMapping`]: the predicate accepts any string and extraction goes
/// through [`EnumMapping::from_tag`].
#[macro_export]
macro_rules! impl_json_convert_for_mapping {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: () = <$ty as $crate::EnumMapping>::HAS_FALLBACK;

            impl $crate::JsonConvert for $ty {
                fn can_convert(json: &$crate::Value) -> bool {
                    json.is_string()
                }

                fn from_json(json: &$crate::Value) -> ::std::result::Result<Self, $crate::JsonError> {
                    json.as_str()
                        .map(<$ty as $crate::EnumMapping>::from_tag)
                        .ok_or($crate::JsonError::TypeMismatch)
                }
            }
        )+
    };
}
