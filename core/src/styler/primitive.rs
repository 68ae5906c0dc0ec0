//! # Primitive Encoder
//!
//! Canonical text for a single scalar, and the bare-primitive style prefixes.

use crate::error::{StyleError, StyleResult};
use crate::style::ParamStyle;
use crate::value::{ParamValue, Scalar};

/// Formats a value that must be a primitive.
///
/// Sequences, records, timestamps and absent values are rejected with
/// `UnsupportedScalarKind`.
pub fn encode_primitive(value: &ParamValue<'_>) -> StyleResult<String> {
    match value {
        ParamValue::Primitive(scalar) => Ok(format_scalar(scalar)),
        other => Err(StyleError::UnsupportedScalarKind(
            other.kind_name().to_string(),
        )),
    }
}

/// Canonical text of a scalar.
///
/// Integers are base-10, floats are the shortest round-trip fixed-point text,
/// booleans are `true`/`false`, and text is returned unchanged.
pub fn format_scalar(scalar: &Scalar<'_>) -> String {
    match scalar {
        Scalar::Int(i) => i.to_string(),
        Scalar::UInt(u) => u.to_string(),
        Scalar::Float(f) => non_finite(*f)
            .map(str::to_string)
            .unwrap_or_else(|| f.to_string()),
        Scalar::Float32(f) => non_finite(f64::from(*f))
            .map(str::to_string)
            .unwrap_or_else(|| f.to_string()),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Text(s) => s.to_string(),
    }
}

// `Display` for floats never switches to exponent notation, so only the
// non-finite values need their own spelling.
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("+Inf")
    } else if value == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

/// Styles a bare primitive parameter.
///
/// Only `simple`, `label`, `matrix` and `form` carry a primitive prefix.
/// The scalar is formatted before the style is checked.
pub(crate) fn style_primitive(
    style: ParamStyle,
    name: &str,
    scalar: &Scalar<'_>,
) -> StyleResult<String> {
    let text = format_scalar(scalar);

    let prefix = match style {
        ParamStyle::Simple => String::new(),
        ParamStyle::Label => ".".to_string(),
        ParamStyle::Matrix => format!(";{}=", name),
        ParamStyle::Form => format!("{}=", name),
        ParamStyle::SpaceDelimited | ParamStyle::PipeDelimited | ParamStyle::DeepObject => {
            return Err(style.unsupported())
        }
    };

    Ok(prefix + &text)
}
