//! # Font Schema
//!
//! Turns metadata entries into declaration-ready records: a safe identifier
//! per family and the exact option schema its declaration accepts.

mod error;
mod identifier;
mod schema;

pub use error::{Error, Result, SchemaViolation};
pub use identifier::{IdentifierRegistry, RESERVED_WORDS, normalize_identifier};
pub use schema::{CompiledFamily, FamilySchema, LiteralUnion, Variation, build_schema};
