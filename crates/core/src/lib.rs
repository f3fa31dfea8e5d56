//! fontdecl core - turns a font metadata table into a declaration module.

pub mod compile;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod source;

pub use compile::{CompiledTable, InvalidFamilyPolicy, SkippedFamily, compile};
pub use error::{Error, Result};
pub use io::OutputFile;
pub use pipeline::{
    CheckReport, FamilySelection, GenerateOptions, GenerationReport, ModuleKind, Rendered, check,
    fetch, generate, render,
};
pub use source::TableSource;

pub use fontdecl_emitter::EmitOptions;
pub use fontdecl_metadata::FontTable;
