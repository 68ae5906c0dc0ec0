//! `ToParamValue` implementations for std, chrono and serde_json types.

use super::{ParamValue, Record, Scalar, ToParamValue};
use chrono::{DateTime, Offset, TimeZone};
use std::borrow::Cow;

macro_rules! impl_scalar {
    ($variant:ident as $repr:ty: $($ty:ty),+) => {
        $(
            impl ToParamValue for $ty {
                fn to_param_value(&self) -> ParamValue<'_> {
                    ParamValue::Primitive(Scalar::$variant(*self as $repr))
                }
            }
        )+
    };
}

impl_scalar!(Int as i64: i8, i16, i32, i64, isize);
impl_scalar!(UInt as u64: u8, u16, u32, u64, usize);
impl_scalar!(Float as f64: f64);
impl_scalar!(Float32 as f32: f32);

impl ToParamValue for bool {
    fn to_param_value(&self) -> ParamValue<'_> {
        ParamValue::Primitive(Scalar::Bool(*self))
    }
}

impl ToParamValue for str {
    fn to_param_value(&self) -> ParamValue<'_> {
        ParamValue::Primitive(Scalar::Text(Cow::Borrowed(self)))
    }
}

impl ToParamValue for String {
    fn to_param_value(&self) -> ParamValue<'_> {
        self.as_str().to_param_value()
    }
}

impl ToParamValue for Cow<'_, str> {
    fn to_param_value(&self) -> ParamValue<'_> {
        (**self).to_param_value()
    }
}

impl<T: ToParamValue + ?Sized> ToParamValue for &T {
    fn to_param_value(&self) -> ParamValue<'_> {
        (**self).to_param_value()
    }
}

impl<T: ToParamValue + ?Sized> ToParamValue for Box<T> {
    fn to_param_value(&self) -> ParamValue<'_> {
        (**self).to_param_value()
    }
}

impl<T: ToParamValue> ToParamValue for Option<T> {
    fn to_param_value(&self) -> ParamValue<'_> {
        match self {
            Some(inner) => inner.to_param_value(),
            None => ParamValue::Absent,
        }
    }
}

impl<T: ToParamValue> ToParamValue for [T] {
    fn to_param_value(&self) -> ParamValue<'_> {
        ParamValue::Sequence(self.iter().map(ToParamValue::to_param_value).collect())
    }
}

impl<T: ToParamValue, const N: usize> ToParamValue for [T; N] {
    fn to_param_value(&self) -> ParamValue<'_> {
        self.as_slice().to_param_value()
    }
}

impl<T: ToParamValue> ToParamValue for Vec<T> {
    fn to_param_value(&self) -> ParamValue<'_> {
        self.as_slice().to_param_value()
    }
}

impl ToParamValue for ParamValue<'_> {
    fn to_param_value(&self) -> ParamValue<'_> {
        self.clone()
    }
}

impl<Tz: TimeZone> ToParamValue for DateTime<Tz> {
    fn to_param_value(&self) -> ParamValue<'_> {
        let offset = self.offset().fix();
        ParamValue::Record(Record::Timestamp(self.with_timezone(&offset)))
    }
}

/// JSON `null` is absent, arrays are sequences, objects are records keyed by
/// their JSON keys.
impl ToParamValue for serde_json::Value {
    fn to_param_value(&self) -> ParamValue<'_> {
        use serde_json::Value;

        match self {
            Value::Null => ParamValue::Absent,
            Value::Bool(b) => ParamValue::Primitive(Scalar::Bool(*b)),
            Value::Number(n) => {
                let scalar = if let Some(i) = n.as_i64() {
                    Scalar::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Scalar::UInt(u)
                } else {
                    Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
                };
                ParamValue::Primitive(scalar)
            }
            Value::String(s) => s.to_param_value(),
            Value::Array(items) => items.to_param_value(),
            Value::Object(map) => ParamValue::record(
                map.iter()
                    .map(|(key, value)| (key.as_str(), value.to_param_value())),
            ),
        }
    }
}
