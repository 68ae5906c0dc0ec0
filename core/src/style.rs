//! # Parameter Styles
//!
//! The OpenAPI `style` enumeration and a reusable parameter description.

use crate::error::{StyleError, StyleResult};
use crate::styler;
use crate::value::ToParamValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameter serialization style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamStyle {
    /// `simple`
    #[default]
    Simple,
    /// `label`
    Label,
    /// `matrix`
    Matrix,
    /// `form`
    Form,
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

impl ParamStyle {
    /// Every recognized style, in declaration order.
    pub const ALL: [ParamStyle; 7] = [
        ParamStyle::Simple,
        ParamStyle::Label,
        ParamStyle::Matrix,
        ParamStyle::Form,
        ParamStyle::SpaceDelimited,
        ParamStyle::PipeDelimited,
        ParamStyle::DeepObject,
    ];

    /// The OpenAPI spelling of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamStyle::Simple => "simple",
            ParamStyle::Label => "label",
            ParamStyle::Matrix => "matrix",
            ParamStyle::Form => "form",
            ParamStyle::SpaceDelimited => "spaceDelimited",
            ParamStyle::PipeDelimited => "pipeDelimited",
            ParamStyle::DeepObject => "deepObject",
        }
    }

    /// Explode value used when a parameter does not declare one.
    ///
    /// `form` defaults to true, everything else to false.
    pub fn default_explode(&self) -> bool {
        matches!(self, ParamStyle::Form)
    }

    pub(crate) fn unsupported(&self) -> StyleError {
        StyleError::UnsupportedStyle(self.as_str().to_string())
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| StyleError::UnsupportedStyle(s.to_string()))
    }
}

/// A parameter's serialization settings, independent of any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name, used verbatim in prefixes and deepObject keys.
    pub name: String,
    /// Serialization style.
    pub style: ParamStyle,
    /// Explode modifier.
    pub explode: bool,
}

impl ParamSpec {
    /// Creates a spec with the style's default explode value.
    pub fn new(name: impl Into<String>, style: ParamStyle) -> Self {
        Self {
            name: name.into(),
            style,
            explode: style.default_explode(),
        }
    }

    /// Overrides the explode modifier.
    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    /// Styles `value` according to this spec.
    pub fn encode<T: ToParamValue + ?Sized>(&self, value: &T) -> StyleResult<String> {
        styler::encode(self.style, self.explode, &self.name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for style in ParamStyle::ALL {
            assert_eq!(style.as_str().parse::<ParamStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "cookie".parse::<ParamStyle>().unwrap_err();
        assert_eq!(err, StyleError::UnsupportedStyle("cookie".into()));

        // Matching is case sensitive
        assert!("Simple".parse::<ParamStyle>().is_err());
    }

    #[test]
    fn test_serde_uses_openapi_spelling() {
        let json = serde_json::to_string(&ParamStyle::SpaceDelimited).unwrap();
        assert_eq!(json, "\"spaceDelimited\"");

        let style: ParamStyle = serde_json::from_str("\"deepObject\"").unwrap();
        assert_eq!(style, ParamStyle::DeepObject);
    }

    #[test]
    fn test_default_explode() {
        assert!(ParamStyle::Form.default_explode());
        assert!(!ParamStyle::Simple.default_explode());
        assert!(!ParamStyle::DeepObject.default_explode());
    }

    #[test]
    fn test_param_spec_encode() {
        let spec = ParamSpec::new("id", ParamStyle::Form);
        assert!(spec.explode);
        assert_eq!(spec.encode(&vec![1, 2]).unwrap(), "id=1&id=2");

        let spec = spec.with_explode(false);
        assert_eq!(spec.encode(&vec![1, 2]).unwrap(), "id=1,2");
    }

    #[test]
    fn test_param_spec_from_json() {
        let spec: ParamSpec =
            serde_json::from_str(r#"{"name":"color","style":"label","explode":true}"#).unwrap();
        assert_eq!(spec.style, ParamStyle::Label);
        assert_eq!(spec.encode(&["a", "b"][..]).unwrap(), ".a.b");
    }
}
