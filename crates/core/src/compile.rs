//! Metadata table → compiled families.

use fontdecl_metadata::{FontFamilyEntry, FontTable};
use fontdecl_schema::{
    self as schema, CompiledFamily, IdentifierRegistry, SchemaViolation, build_schema,
};
use log::{debug, warn};
use rayon::prelude::*;

use crate::error::Result;

/// What to do with a family whose axis metadata is invalid.
///
/// Applied uniformly to every family in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidFamilyPolicy {
    /// Fail the run on the first invalid family in table order.
    #[default]
    Abort,
    /// Leave invalid families out of the output and report them.
    Skip,
}

/// A family left out of the output under [`InvalidFamilyPolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFamily {
    pub family: String,
    pub reason: SchemaViolation,
}

/// Families ready for emission, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledTable {
    pub families: Vec<CompiledFamily>,
    pub skipped: Vec<SkippedFamily>,
}

/// Build every family's schema and identifier.
///
/// Schemas are built in parallel and collected back in table order;
/// identifiers are assigned sequentially so collisions are reported against
/// the earlier family. `declared` lists names the output module declares
/// itself; a family normalizing to one of them fails the run.
pub fn compile(
    table: &FontTable,
    policy: InvalidFamilyPolicy,
    declared: &[&str],
) -> Result<CompiledTable> {
    let entries: Vec<&FontFamilyEntry> = table.iter().collect();
    let schemas: Vec<_> = entries.par_iter().map(|entry| build_schema(entry)).collect();

    let mut registry = IdentifierRegistry::with_declared(declared.iter().copied());
    let mut compiled = CompiledTable {
        families: Vec::with_capacity(entries.len()),
        skipped: Vec::new(),
    };

    for (entry, schema) in entries.into_iter().zip(schemas) {
        let schema = match schema {
            Ok(schema) => schema,
            Err(schema::Error::SchemaInvariant { family, violation })
                if policy == InvalidFamilyPolicy::Skip =>
            {
                warn!("Skipping \"{family}\": {violation}");
                compiled.skipped.push(SkippedFamily { family, reason: violation });
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let identifier = registry.register(&entry.family)?;
        debug!("\"{}\" -> {identifier}", entry.family);
        compiled.families.push(CompiledFamily {
            family: entry.family.clone(),
            identifier,
            schema,
        });
    }

    Ok(compiled)
}
