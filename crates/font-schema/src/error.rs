//! Error types for identifier normalization and schema building.

use std::result;

use serde_json::Number;

/// Errors raised while turning a family into a declaration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("font family name is empty")]
    EmptyFamilyName,

    #[error(
        "font families \"{first}\" and \"{second}\" both normalize to identifier `{identifier}`"
    )]
    NormalizationCollision { first: String, second: String, identifier: String },

    #[error(
        "font family \"{family}\" normalizes to `{identifier}`, which the generated module already declares"
    )]
    ModuleNameClash { family: String, identifier: String },

    #[error("font family \"{family}\" is invalid: {violation}")]
    SchemaInvariant { family: String, violation: SchemaViolation },
}

/// The specific invariant a family's metadata breaks.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("axis `{tag}` has min {min} greater than max {max}")]
    InvertedRange { tag: String, min: Number, max: Number },

    #[error("axis `{tag}` default {default} is outside [{min}, {max}]")]
    DefaultOutOfRange { tag: String, min: Number, max: Number, default: Number },

    #[error("declares variable axes but its weights do not include \"variable\"")]
    AxesWithoutVariableWeight,

    #[error("axis tag `{0}` is not a valid field name")]
    InvalidAxisTag(String),

    #[error("axis `{0}` is declared more than once")]
    DuplicateAxis(String),
}

pub type Result<T> = result::Result<T, Error>;
