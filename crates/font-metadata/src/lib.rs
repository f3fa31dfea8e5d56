//! # Font Metadata
//!
//! The font family metadata table: family name → weights, styles, subsets and
//! variable axes. This is the single source of truth declaration generation
//! runs from.
//!
//! ## Example
//!
//! ```
//! use fontdecl_metadata::FontTable;
//!
//! let table = FontTable::from_json(
//!     r#"{ "Foo": { "weights": ["400"], "styles": [], "subsets": ["latin"], "axes": [] } }"#,
//! )
//! .unwrap();
//! assert_eq!(table.family_names().collect::<Vec<_>>(), ["Foo"]);
//! ```

mod error;
mod table;
mod types;

pub use error::{Error, Result};
pub use table::FontTable;
pub use types::{AxisSpec, FontFamilyEntry, VARIABLE_WEIGHT, Weight};
