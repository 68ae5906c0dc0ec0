//! # Record Declarations
//!
//! Records expose their fields under statically declared wire names.
//! The [`style_record!`](crate::style_record) macro writes both the
//! [`StyleRecord`] and the [`ToParamValue`](super::ToParamValue) impls.

use super::RecordField;

/// A flat record whose fields are styled under their wire names.
pub trait StyleRecord {
    /// The record's fields, in declaration order.
    fn fields(&self) -> Vec<RecordField<'_>>;
}

/// Declares how a struct is styled as a record.
///
/// Each field is listed by its Rust name, optionally followed by `=> "wireName"`.
/// Fields without an explicit wire name use their Rust name.
///
/// ```
/// use paramstyle_core::{encode, style_record, ParamStyle};
///
/// struct Color {
///     red: u8,
///     green: u8,
///     alpha: Option<f32>,
/// }
///
/// style_record!(Color {
///     red => "R",
///     green => "G",
///     alpha,
/// });
///
/// let color = Color { red: 100, green: 200, alpha: None };
/// let styled = encode(ParamStyle::Form, true, "color", &color).unwrap();
/// assert_eq!(styled, "G=200&R=100");
/// ```
#[macro_export]
macro_rules! style_record {
    (@wire $field:ident $wire:literal) => {
        $wire
    };
    (@wire $field:ident) => {
        ::std::stringify!($field)
    };
    ($ty:ty { $($field:ident $(=> $wire:literal)?),* $(,)? }) => {
        impl $crate::StyleRecord for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::RecordField<'_>> {
                ::std::vec![
                    $(
                        $crate::RecordField::new(
                            $crate::style_record!(@wire $field $($wire)?),
                            $crate::ToParamValue::to_param_value(&self.$field),
                        ),
                    )*
                ]
            }
        }

        impl $crate::ToParamValue for $ty {
            fn to_param_value(&self) -> $crate::ParamValue<'_> {
                $crate::ParamValue::Record($crate::Record::Fields(
                    $crate::StyleRecord::fields(self),
                ))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ParamValue, Record, ToParamValue};

    struct Point {
        x: i32,
        y_coord: i32,
        label: Option<String>,
    }

    crate::style_record!(Point {
        x,
        y_coord => "y",
        label => "name",
    });

    #[test]
    fn test_wire_names_follow_declaration() {
        let point = Point {
            x: 1,
            y_coord: 2,
            label: None,
        };
        let names: Vec<_> = point.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["x", "y", "name"]);
    }

    #[test]
    fn test_record_shape() {
        let point = Point {
            x: 1,
            y_coord: 2,
            label: Some("origin".into()),
        };
        let value = point.to_param_value();
        let expected = ParamValue::Record(Record::Fields(vec![
            RecordField::new("x", ParamValue::int(1)),
            RecordField::new("y", ParamValue::int(2)),
            RecordField::new("name", ParamValue::text("origin")),
        ]));
        assert_eq!(value, expected);
    }
}
