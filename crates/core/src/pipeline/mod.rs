//! Generation pipeline: load → select → compile → render → write.

mod fetch;

pub use fetch::fetch;

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use fontdecl_emitter::{DeclarationModule, EmitOptions, StubModule};
use fontdecl_metadata::FontTable;
use log::info;

use crate::{
    compile::{CompiledTable, InvalidFamilyPolicy, SkippedFamily, compile},
    config::POPULAR_FONTS,
    error::Result,
    io::OutputFile,
    source::TableSource,
};

/// Which families of the table to emit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FamilySelection {
    #[default]
    All,
    /// Families from [`POPULAR_FONTS`] present in the table.
    Popular,
    /// Exactly these families; each must exist in the table.
    Only(Vec<String>),
}

impl FamilySelection {
    /// Narrow `table`, keeping table order.
    pub fn apply(&self, table: &FontTable) -> Result<FontTable> {
        Ok(match self {
            Self::All => table.clone(),
            Self::Popular => table.filter(|entry| POPULAR_FONTS.contains(&entry.family.as_str())),
            Self::Only(names) => table.select(names)?,
        })
    }
}

/// The kind of module to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleKind {
    /// One typed declaration per family.
    #[default]
    Declarations,
    /// Placeholder exports for every family.
    Stub,
}

/// Per-run settings.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub kind: ModuleKind,
    pub policy: InvalidFamilyPolicy,
    pub selection: FamilySelection,
    pub emit: EmitOptions,
}

impl GenerateOptions {
    /// Names the chosen module declares besides its families.
    pub fn declared_names(&self) -> Vec<&str> {
        match self.kind {
            ModuleKind::Declarations => DeclarationModule::declared_names(&self.emit),
            ModuleKind::Stub => StubModule::declared_names(&self.emit),
        }
    }
}

/// A rendered module and what went into it.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub compiled: CompiledTable,
}

/// Outcome of a [`generate`] run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub emitted: usize,
    pub skipped: Vec<SkippedFamily>,
    pub bytes: usize,
    /// `false` when the output already held identical text and was left alone.
    pub changed: bool,
}

/// Outcome of a [`check`] run.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub families: usize,
    pub valid: usize,
    pub skipped: Vec<SkippedFamily>,
}

/// Render a module from a table without touching the filesystem.
///
/// The same table and options always give the same text.
pub fn render(table: &FontTable, options: &GenerateOptions) -> Result<Rendered> {
    let table = options.selection.apply(table)?;
    let compiled = compile(&table, options.policy, &options.declared_names())?;
    let text = match options.kind {
        ModuleKind::Declarations => {
            DeclarationModule::new(&compiled.families, &options.emit).to_string()
        }
        ModuleKind::Stub => {
            StubModule::new(&compiled.families, POPULAR_FONTS, &options.emit).to_string()
        }
    };
    Ok(Rendered { text, compiled })
}

/// Load a table, render it and replace `output` atomically.
///
/// Nothing is written unless every stage before the write succeeds.
pub fn generate(
    source: &TableSource,
    output: &Path,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let table = run_stage("load", || source.load())?;
    let Rendered { text, compiled } = run_stage("render", || render(&table, options))?;

    let file = OutputFile::new(output);
    let changed = !file.has_contents(&text);
    if changed {
        run_stage("write", || file.write_atomic(&text))?;
    } else {
        info!("{} is up to date", output.display());
    }

    Ok(GenerationReport {
        output: output.to_path_buf(),
        emitted: compiled.families.len(),
        skipped: compiled.skipped,
        bytes: text.len(),
        changed,
    })
}

/// Load and compile a table, reporting problems without writing anything.
pub fn check(source: &TableSource, options: &GenerateOptions) -> Result<CheckReport> {
    let table = run_stage("load", || source.load())?;
    let table = options.selection.apply(&table)?;
    let declared = options.declared_names();
    let compiled = run_stage("compile", || compile(&table, options.policy, &declared))?;
    Ok(CheckReport {
        families: table.len(),
        valid: compiled.families.len(),
        skipped: compiled.skipped,
    })
}

fn run_stage<T>(name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let value = f()?;
    info!("✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(value)
}
