//! # Sequence Encoder
//!
//! Styles ordered sequences of primitives. Element order is preserved.

use crate::error::{Member, StyleResult};
use crate::style::ParamStyle;
use crate::styler::primitive::encode_primitive;
use crate::styler::Delimiters;
use crate::value::ParamValue;

/// Prefix and separator for a sequence parameter.
///
/// `deepObject` has no sequence form.
fn sequence_delimiters(style: ParamStyle, explode: bool, name: &str) -> StyleResult<Delimiters> {
    let delimiters = match style {
        ParamStyle::Simple => Delimiters::new("", ","),
        ParamStyle::Label => Delimiters::new(".", if explode { "." } else { "," }),
        ParamStyle::Matrix => {
            let prefix = format!(";{}=", name);
            let separator = if explode { prefix.clone() } else { ",".to_string() };
            Delimiters::new(prefix, separator)
        }
        ParamStyle::Form | ParamStyle::SpaceDelimited | ParamStyle::PipeDelimited => {
            let prefix = format!("{}=", name);
            let separator = match (explode, style) {
                (true, _) => format!("&{}", prefix),
                (false, ParamStyle::SpaceDelimited) => " ".to_string(),
                (false, ParamStyle::PipeDelimited) => "|".to_string(),
                (false, _) => ",".to_string(),
            };
            Delimiters::new(prefix, separator)
        }
        ParamStyle::DeepObject => return Err(style.unsupported()),
    };
    Ok(delimiters)
}

/// Styles `items` as a sequence parameter named `name`.
///
/// The style is checked before any element is formatted. An element that is
/// not a primitive aborts the call with a `FieldFormat` error naming its index.
pub fn encode_sequence(
    style: ParamStyle,
    explode: bool,
    name: &str,
    items: &[ParamValue<'_>],
) -> StyleResult<String> {
    let delimiters = sequence_delimiters(style, explode, name)?;

    let parts = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            encode_primitive(item).map_err(|e| e.in_member(name, Member::Index(index)))
        })
        .collect::<StyleResult<Vec<_>>>()?;

    Ok(delimiters.join(&parts))
}
