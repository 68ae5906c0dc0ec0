#![deny(missing_docs)]

//! # Paramstyle Core
//!
//! OpenAPI parameter serialization: renders primitives, sequences and flat
//! records as path, query or header text according to `style` and `explode`.
//!
//! The output is not percent-encoded; callers escape it for its destination.

/// Shared error types.
pub mod error;

/// Style enumeration and parameter descriptions.
pub mod style;

/// Value shapes and conversions.
pub mod value;

/// Shape dispatch and the per-shape encoders.
pub mod styler;

pub use error::{Member, StyleError, StyleResult};
pub use style::{ParamSpec, ParamStyle};
pub use styler::{encode, encode_str, encode_value};
pub use value::{ParamValue, Record, RecordField, Scalar, StyleRecord, ToParamValue};
