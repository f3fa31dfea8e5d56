//! Per-family option schemas.

use fontdecl_metadata::{AxisSpec, FontFamilyEntry};

use crate::error::{Error, Result, SchemaViolation};

/// Option names every declaration has; axis tags may not shadow them.
const OPTION_FIELDS: &[&str] = &[
    "weight",
    "style",
    "display",
    "variable",
    "preload",
    "fallback",
    "adjustFontFallback",
    "subsets",
];

/// An enumerated set of string literals, in declared order.
///
/// `Empty` is a real outcome, not a missing value: a family with no declared
/// styles accepts no style literal at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralUnion {
    Empty,
    Members(Vec<String>),
}

impl LiteralUnion {
    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.is_empty() { Self::Empty } else { Self::Members(members) }
    }

    pub fn members(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Members(members) => members,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Whether a family exposes a variable entry point, and with which axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Variation {
    /// Fixed weights only; no axis fields.
    Static,
    /// `"variable"` is an accepted weight; `axes` may still be empty.
    Variable { axes: Vec<AxisSpec> },
}

impl Variation {
    pub fn axes(&self) -> &[AxisSpec] {
        match self {
            Self::Static => &[],
            Self::Variable { axes } => axes,
        }
    }
}

/// The exact options one family's declaration accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilySchema {
    pub weight: LiteralUnion,
    pub style: LiteralUnion,
    pub subsets: LiteralUnion,
    pub variation: Variation,
}

/// A family ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFamily {
    pub family: String,
    pub identifier: String,
    pub schema: FamilySchema,
}

/// Derive the option schema for one family.
///
/// Literal order is copied from the entry untouched and axis values are
/// carried over verbatim. Broken axis metadata fails with
/// [`Error::SchemaInvariant`].
pub fn build_schema(entry: &FontFamilyEntry) -> Result<FamilySchema> {
    let invalid = |violation: SchemaViolation| Error::SchemaInvariant {
        family: entry.family.clone(),
        violation,
    };

    let variation = if entry.is_variable() {
        let mut seen: Vec<&str> = Vec::with_capacity(entry.axes.len());
        for axis in &entry.axes {
            check_axis(axis).map_err(invalid)?;
            if seen.contains(&axis.tag.as_str()) {
                return Err(invalid(SchemaViolation::DuplicateAxis(axis.tag.clone())));
            }
            seen.push(&axis.tag);
        }
        Variation::Variable { axes: entry.axes.clone() }
    } else if entry.axes.is_empty() {
        Variation::Static
    } else {
        return Err(invalid(SchemaViolation::AxesWithoutVariableWeight));
    };

    Ok(FamilySchema {
        weight: LiteralUnion::from_members(entry.weights.iter().map(|w| w.as_str())),
        style: LiteralUnion::from_members(entry.styles.iter().cloned()),
        subsets: LiteralUnion::from_members(entry.subsets.iter().cloned()),
        variation,
    })
}

fn check_axis(axis: &AxisSpec) -> std::result::Result<(), SchemaViolation> {
    if !is_field_name(&axis.tag) || OPTION_FIELDS.contains(&axis.tag.as_str()) {
        return Err(SchemaViolation::InvalidAxisTag(axis.tag.clone()));
    }

    let (min, max, default) = (axis.min_value(), axis.max_value(), axis.default_value());
    if min > max {
        return Err(SchemaViolation::InvertedRange {
            tag: axis.tag.clone(),
            min: axis.min.clone(),
            max: axis.max.clone(),
        });
    }
    if default < min || default > max {
        return Err(SchemaViolation::DefaultOutOfRange {
            tag: axis.tag.clone(),
            min: axis.min.clone(),
            max: axis.max.clone(),
            default: axis.default.clone(),
        });
    }
    Ok(())
}

fn is_field_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
