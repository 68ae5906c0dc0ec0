//! # Styler
//!
//! Turns one `(style, explode, name, value)` tuple into the wire text of that
//! parameter. The output is not percent-encoded.
//!
//! Dispatch:
//! - Absent values are an error, never an empty string.
//! - Sequences go to the [`sequence`] encoder.
//! - Records and timestamps go to the [`record`] encoder.
//! - Anything else is a bare primitive, see [`primitive`].

use crate::error::{StyleError, StyleResult};
use crate::style::ParamStyle;
use crate::value::{ParamValue, ToParamValue};

pub mod primitive;
pub mod record;
pub mod sequence;

pub use primitive::{encode_primitive, format_scalar};
pub use record::{encode_record, format_timestamp};
pub use sequence::encode_sequence;

/// Leading text and joiner around the encoded members of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Delimiters {
    prefix: String,
    separator: String,
}

impl Delimiters {
    pub(crate) fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    /// `prefix` followed by `parts` joined with `separator`.
    pub(crate) fn join(&self, parts: &[String]) -> String {
        let mut out = self.prefix.clone();
        out.push_str(&parts.join(&self.separator));
        out
    }
}

/// Styles `value` as the parameter `name`.
///
/// # Arguments
///
/// * `style` - Serialization style.
/// * `explode` - Explode modifier. `deepObject` requires `true`.
/// * `name` - Parameter name, used verbatim.
/// * `value` - A primitive, sequence, record, or `Option` of those.
///
/// # Example
///
/// ```
/// use paramstyle_core::{encode, ParamStyle};
///
/// let styled = encode(ParamStyle::Matrix, true, "id", &[3, 4, 5]).unwrap();
/// assert_eq!(styled, ";id=3;id=4;id=5");
/// ```
pub fn encode<T: ToParamValue + ?Sized>(
    style: ParamStyle,
    explode: bool,
    name: &str,
    value: &T,
) -> StyleResult<String> {
    encode_value(style, explode, name, &value.to_param_value())
}

/// As [`encode`], with the style given by its OpenAPI name.
///
/// Unrecognized names fail with `UnsupportedStyle`. An absent value is
/// reported before the style name is looked at.
pub fn encode_str<T: ToParamValue + ?Sized>(
    style: &str,
    explode: bool,
    name: &str,
    value: &T,
) -> StyleResult<String> {
    let value = value.to_param_value();
    if value.is_absent() {
        return Err(StyleError::AbsentValue);
    }
    encode_value(style.parse()?, explode, name, &value)
}

/// Styles an already converted [`ParamValue`].
pub fn encode_value(
    style: ParamStyle,
    explode: bool,
    name: &str,
    value: &ParamValue<'_>,
) -> StyleResult<String> {
    log::trace!(
        "styling {} parameter '{}' as {} (explode={})",
        value.kind_name(),
        name,
        style,
        explode
    );

    match value {
        ParamValue::Absent => Err(StyleError::AbsentValue),
        ParamValue::Sequence(items) => encode_sequence(style, explode, name, items),
        ParamValue::Record(record) => encode_record(style, explode, name, record),
        ParamValue::Primitive(scalar) => primitive::style_primitive(style, name, scalar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    #[test]
    fn test_absent_is_an_error() {
        let missing: Option<Vec<i32>> = None;
        assert_eq!(
            encode(ParamStyle::Simple, false, "id", &missing),
            Err(StyleError::AbsentValue)
        );
        assert_eq!(
            encode_str("bogus", false, "id", &missing),
            Err(StyleError::AbsentValue)
        );
    }

    #[test]
    fn test_dispatches_on_shape() {
        assert_eq!(encode(ParamStyle::Form, false, "n", &5).unwrap(), "n=5");
        assert_eq!(
            encode(ParamStyle::Form, false, "n", &Some(vec![1, 2])).unwrap(),
            "n=1,2"
        );
        let record = ParamValue::record([("k", ParamValue::bool(true))]);
        assert_eq!(
            encode(ParamStyle::Form, false, "n", &record).unwrap(),
            "n=k,true"
        );
    }

    #[test]
    fn test_encode_str_parses_style() {
        assert_eq!(encode_str("label", true, "id", &[1, 2]).unwrap(), ".1.2");
        assert_eq!(
            encode_str("cookie", true, "id", &[1, 2]),
            Err(StyleError::UnsupportedStyle("cookie".into()))
        );
    }

    #[test]
    fn test_sequence_style_checked_before_elements() {
        let nested = ParamValue::Record(Record::Fields(vec![]));
        let seq = ParamValue::Sequence(vec![nested]);
        assert_eq!(
            encode(ParamStyle::DeepObject, true, "id", &seq),
            Err(StyleError::UnsupportedStyle("deepObject".into()))
        );
    }

    #[test]
    fn test_delimiters_join() {
        let d = Delimiters::new("p=", ",");
        assert_eq!(d.join(&[]), "p=");
        assert_eq!(d.join(&["a".into(), "b".into()]), "p=a,b");
    }
}
