//! Family and axis records.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Weight token that marks a family as loadable through its variable font.
pub const VARIABLE_WEIGHT: &str = "variable";

/// One entry of a family's weight list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Weight {
    /// A fixed weight label such as `"400"`.
    Fixed(String),
    /// The `"variable"` sentinel.
    Variable,
}

impl Weight {
    pub fn parse(token: &str) -> Self {
        if token == VARIABLE_WEIGHT {
            Self::Variable
        } else {
            Self::Fixed(token.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed(label) => label,
            Self::Variable => VARIABLE_WEIGHT,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Some feeds write weights as bare numbers.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawWeight {
            Text(String),
            Number(Number),
        }

        Ok(match RawWeight::deserialize(deserializer)? {
            RawWeight::Text(token) => Self::parse(&token),
            RawWeight::Number(n) => Self::Fixed(n.to_string()),
        })
    }
}

/// One variable-font axis with its range.
///
/// Values keep the number exactly as the table wrote it, so `400` renders as
/// `400`, `0.5` as `0.5` and `1e2` as `1e2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisSpec {
    pub tag: String,
    pub min: Number,
    pub max: Number,
    #[serde(alias = "defaultValue")]
    pub default: Number,
}

impl AxisSpec {
    pub fn new(tag: impl Into<String>, min: Number, max: Number, default: Number) -> Self {
        Self { tag: tag.into(), min, max, default }
    }

    pub fn min_value(&self) -> f64 {
        as_f64(&self.min)
    }

    pub fn max_value(&self) -> f64 {
        as_f64(&self.max)
    }

    pub fn default_value(&self) -> f64 {
        as_f64(&self.default)
    }
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// Declared capabilities of one font family.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFamilyEntry {
    pub family: String,
    pub weights: Vec<Weight>,
    pub styles: Vec<String>,
    pub subsets: Vec<String>,
    pub axes: Vec<AxisSpec>,
}

impl FontFamilyEntry {
    /// Create an entry with only weights; styles, subsets and axes start empty.
    pub fn new<I, S>(family: impl Into<String>, weights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            family: family.into(),
            weights: weights.into_iter().map(|w| Weight::parse(w.as_ref())).collect(),
            styles: Vec::new(),
            subsets: Vec::new(),
            axes: Vec::new(),
        }
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subsets<I, S>(mut self, subsets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subsets = subsets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_axes(mut self, axes: impl IntoIterator<Item = AxisSpec>) -> Self {
        self.axes = axes.into_iter().collect();
        self
    }

    /// Whether the weight list carries the `"variable"` sentinel.
    pub fn is_variable(&self) -> bool {
        self.weights.iter().any(Weight::is_variable)
    }
}

/// Entry body as it appears under a family key in the JSON table.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    weights: Vec<Weight>,
    #[serde(default, alias = "style", deserialize_with = "one_or_many")]
    styles: Vec<String>,
    #[serde(default)]
    subsets: Vec<String>,
    #[serde(default)]
    axes: Vec<AxisSpec>,
}

impl RawEntry {
    pub(crate) fn into_entry(self, family: String) -> FontFamilyEntry {
        FontFamilyEntry {
            family,
            weights: self.weights,
            styles: self.styles,
            subsets: self.subsets,
            axes: self.axes,
        }
    }
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
