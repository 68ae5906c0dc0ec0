//! # Record Encoder
//!
//! Styles flat records of primitives, including the `deepObject` form.
//! Timestamps short-circuit to RFC 3339 text whatever the style.

use crate::error::{Member, StyleError, StyleResult};
use crate::style::ParamStyle;
use crate::styler::primitive::encode_primitive;
use crate::styler::Delimiters;
use crate::value::{Record, RecordField};
use chrono::{DateTime, FixedOffset, Timelike};
use std::collections::BTreeMap;

/// Prefix and separator for a record parameter.
///
/// For `deepObject` the prefix is empty; each field carries `name[key]=`.
fn record_delimiters(style: ParamStyle, explode: bool, name: &str) -> StyleResult<Delimiters> {
    let delimiters = match (style, explode) {
        (ParamStyle::Simple, _) => Delimiters::new("", ","),
        (ParamStyle::Label, true) => Delimiters::new(".", "."),
        (ParamStyle::Label, false) => Delimiters::new(".", ","),
        (ParamStyle::Matrix, true) => Delimiters::new(";", ";"),
        (ParamStyle::Matrix, false) => Delimiters::new(format!(";{}=", name), ","),
        (ParamStyle::Form, true) => Delimiters::new("", "&"),
        (ParamStyle::Form, false) => Delimiters::new(format!("{}=", name), ","),
        (ParamStyle::DeepObject, true) => Delimiters::new("", "&"),
        (ParamStyle::DeepObject, false) => return Err(StyleError::InvalidDeepObjectUsage),
        (ParamStyle::SpaceDelimited | ParamStyle::PipeDelimited, _) => {
            return Err(style.unsupported())
        }
    };
    Ok(delimiters)
}

/// Formats every present field, keyed and sorted by wire name.
fn format_fields<'a>(
    name: &str,
    fields: &'a [RecordField<'_>],
) -> StyleResult<BTreeMap<&'a str, String>> {
    let mut formatted = BTreeMap::new();

    for field in fields {
        // Unset optional fields are left out entirely
        if field.value.is_absent() {
            continue;
        }
        let text = encode_primitive(&field.value)
            .map_err(|e| e.in_member(name, Member::Field(field.name.to_string())))?;
        formatted.insert(field.name.as_ref(), text);
    }

    Ok(formatted)
}

/// Styles `record` as a parameter named `name`.
///
/// Fields are emitted in ascending wire-name order. Field formatting errors
/// take precedence over style errors.
pub fn encode_record(
    style: ParamStyle,
    explode: bool,
    name: &str,
    record: &Record<'_>,
) -> StyleResult<String> {
    let fields = match record {
        Record::Timestamp(ts) => return Ok(format_timestamp(ts)),
        Record::Fields(fields) => fields,
    };

    let formatted = format_fields(name, fields)?;
    let delimiters = record_delimiters(style, explode, name)?;

    let parts: Vec<String> = match style {
        ParamStyle::DeepObject => formatted
            .iter()
            .map(|(key, value)| format!("{}[{}]={}", name, key, value))
            .collect(),
        _ if explode => formatted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect(),
        _ => formatted
            .into_iter()
            .flat_map(|(key, value)| [key.to_string(), value])
            .collect(),
    };

    Ok(delimiters.join(&parts))
}

/// RFC 3339 text with nanosecond precision.
///
/// Trailing zeros of the fraction are dropped, and the fraction is omitted
/// when zero. A zero offset is written as `Z`.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    let mut out = ts.format("%Y-%m-%dT%H:%M:%S").to_string();

    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    if ts.offset().local_minus_utc() == 0 {
        out.push('Z');
    } else {
        out.push_str(&ts.format("%:z").to_string());
    }
    out
}
