//! # Value Model
//!
//! The closed set of shapes the Styler accepts, and the `ToParamValue`
//! conversion that maps Rust values onto them.
//!
//! Shapes:
//! - `Primitive`: integer, float, boolean or text.
//! - `Sequence`: ordered elements, each expected to be a primitive.
//! - `Record`: flat wire-name keyed fields, or a timestamp.
//! - `Absent`: an empty nullable wrapper.

use chrono::{DateTime, FixedOffset};
use std::borrow::Cow;

mod convert;
pub mod record;

pub use record::StyleRecord;

/// A single scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    UInt(u64),
    /// Double precision float.
    Float(f64),
    /// Single precision float, kept apart so it formats at its own precision.
    Float32(f32),
    /// Boolean.
    Bool(bool),
    /// Text, emitted verbatim.
    Text(Cow<'a, str>),
}

/// A value to be styled, borrowed from the caller where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue<'a> {
    /// Nullable wrapper holding nothing.
    Absent,
    /// A scalar.
    Primitive(Scalar<'a>),
    /// Ordered elements.
    Sequence(Vec<ParamValue<'a>>),
    /// A record or timestamp.
    Record(Record<'a>),
}

/// The two forms a record-shaped value takes.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    /// Named fields, in declaration order.
    Fields(Vec<RecordField<'a>>),
    /// A point in time. Always rendered as RFC 3339 text.
    Timestamp(DateTime<FixedOffset>),
}

/// One record field, keyed by its wire name.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField<'a> {
    /// Name used in the encoded output.
    pub name: Cow<'a, str>,
    /// Field value. `Absent` fields are left out of the output.
    pub value: ParamValue<'a>,
}

impl<'a> RecordField<'a> {
    /// Creates a field.
    pub fn new(name: impl Into<Cow<'a, str>>, value: ParamValue<'a>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl<'a> ParamValue<'a> {
    /// Signed integer primitive.
    pub fn int(value: i64) -> Self {
        ParamValue::Primitive(Scalar::Int(value))
    }

    /// Float primitive.
    pub fn float(value: f64) -> Self {
        ParamValue::Primitive(Scalar::Float(value))
    }

    /// Boolean primitive.
    pub fn bool(value: bool) -> Self {
        ParamValue::Primitive(Scalar::Bool(value))
    }

    /// Text primitive.
    pub fn text(value: impl Into<Cow<'a, str>>) -> Self {
        ParamValue::Primitive(Scalar::Text(value.into()))
    }

    /// Record built from `(wire name, value)` pairs.
    pub fn record<N>(fields: impl IntoIterator<Item = (N, ParamValue<'a>)>) -> Self
    where
        N: Into<Cow<'a, str>>,
    {
        ParamValue::Record(Record::Fields(
            fields
                .into_iter()
                .map(|(name, value)| RecordField::new(name, value))
                .collect(),
        ))
    }

    /// True for an empty nullable wrapper.
    pub fn is_absent(&self) -> bool {
        matches!(self, ParamValue::Absent)
    }

    /// Short name of the value's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Absent => "null",
            ParamValue::Primitive(scalar) => scalar.kind_name(),
            ParamValue::Sequence(_) => "sequence",
            ParamValue::Record(Record::Fields(_)) => "record",
            ParamValue::Record(Record::Timestamp(_)) => "timestamp",
        }
    }
}

impl Scalar<'_> {
    /// Short name of the scalar's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) | Scalar::UInt(_) => "integer",
            Scalar::Float(_) | Scalar::Float32(_) => "float",
            Scalar::Bool(_) => "boolean",
            Scalar::Text(_) => "text",
        }
    }
}

/// Conversion of a Rust value into the shape the Styler works on.
///
/// Implemented for primitives, `Option`, sequences, `chrono::DateTime`,
/// `serde_json::Value`, and any record declared with [`style_record!`](crate::style_record).
pub trait ToParamValue {
    /// Borrows `self` as a [`ParamValue`].
    fn to_param_value(&self) -> ParamValue<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ParamValue::Absent.kind_name(), "null");
        assert_eq!(ParamValue::int(1).kind_name(), "integer");
        assert_eq!(ParamValue::float(1.5).kind_name(), "float");
        assert_eq!(ParamValue::text("x").kind_name(), "text");
        assert_eq!(ParamValue::Sequence(vec![]).kind_name(), "sequence");
        assert_eq!(
            ParamValue::record([("a", ParamValue::bool(true))]).kind_name(),
            "record"
        );
    }

    #[test]
    fn test_record_builder_keeps_declaration_order() {
        let value = ParamValue::record([("b", ParamValue::int(2)), ("a", ParamValue::int(1))]);
        match value {
            ParamValue::Record(Record::Fields(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.name.as_ref()).collect();
                assert_eq!(names, vec!["b", "a"]);
            }
            other => panic!("expected record fields, got {:?}", other),
        }
    }
}
