//! # Error Handling
//!
//! Provides the `StyleError` enum returned by every encoder.

use derive_more::Display;

/// Locates the member of a sequence or record that failed to format.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Member {
    /// Zero-based position within a sequence.
    #[display("index {_0}")]
    Index(usize),

    /// Wire name of a record field.
    #[display("field '{_0}'")]
    Field(String),
}

/// The Styler Error Enum.
///
/// Every variant is terminal for the call that produced it.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum StyleError {
    /// The top-level nullable wrapper held no value.
    #[display("value is absent")]
    AbsentValue,

    /// The style is not recognized, or not valid for the shape of the value.
    #[display("unsupported style '{_0}'")]
    UnsupportedStyle(String),

    /// `deepObject` was requested with explode disabled.
    #[display("deepObject parameters must be exploded")]
    InvalidDeepObjectUsage,

    /// The value is not an integer, float, boolean or text.
    /// Carries the name of the offending kind.
    #[display("unsupported type {_0}")]
    UnsupportedScalarKind(String),

    /// A scalar failure inside a sequence element or record field.
    #[display("error formatting '{param}' at {member}: {cause}")]
    FieldFormat {
        /// Name of the parameter being styled.
        param: String,
        /// The element or field that failed.
        member: Member,
        /// The underlying failure.
        cause: Box<StyleError>,
    },
}

impl StyleError {
    /// Wraps `self` as the cause of a member failure of `param`.
    pub(crate) fn in_member(self, param: &str, member: Member) -> Self {
        StyleError::FieldFormat {
            param: param.to_string(),
            member,
            cause: Box::new(self),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::FieldFormat { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// Helper type alias for Result using StyleError.
pub type StyleResult<T> = Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_messages() {
        assert_eq!(StyleError::AbsentValue.to_string(), "value is absent");
        assert_eq!(
            StyleError::UnsupportedStyle("cookie".into()).to_string(),
            "unsupported style 'cookie'"
        );
        assert_eq!(
            StyleError::InvalidDeepObjectUsage.to_string(),
            "deepObject parameters must be exploded"
        );
        assert_eq!(
            StyleError::UnsupportedScalarKind("record".into()).to_string(),
            "unsupported type record"
        );
    }

    #[test]
    fn test_field_format_wraps_cause() {
        let err = StyleError::UnsupportedScalarKind("sequence".into())
            .in_member("color", Member::Field("R".into()));

        assert_eq!(
            err.to_string(),
            "error formatting 'color' at field 'R': unsupported type sequence"
        );
        let source = err.source().expect("field errors carry a cause");
        assert_eq!(source.to_string(), "unsupported type sequence");
    }

    #[test]
    fn test_index_member_display() {
        let err = StyleError::UnsupportedScalarKind("null".into()).in_member("id", Member::Index(2));
        assert_eq!(
            err.to_string(),
            "error formatting 'id' at index 2: unsupported type null"
        );
        assert!(StyleError::AbsentValue.source().is_none());
    }
}
