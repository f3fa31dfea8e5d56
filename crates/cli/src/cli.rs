//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use fontdecl_core::{
    EmitOptions, FamilySelection, GenerateOptions, InvalidFamilyPolicy, ModuleKind, TableSource,
    check, config::DEFAULT_TABLE_FILENAME, fetch, generate,
};
use fontdecl_emitter::{
    DEFAULT_COMBINED_TYPE, DEFAULT_COMPLEMENTARY_MODULE, DEFAULT_COMPLEMENTARY_TYPE,
    DEFAULT_FAMILY_TYPE, DEFAULT_INSTALL_HINT, DEFAULT_RETURN_TYPE, DEFAULT_TYPES_MODULE,
};

use crate::summary::{print_check, print_generation};

#[derive(Parser)]
#[command(name = "fontdecl")]
#[command(about = "Generate TypeScript font family declarations from a font metadata table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Metadata table: a JSON file path or an http(s) URL.
    #[arg(short, long, default_value = DEFAULT_TABLE_FILENAME)]
    pub input: TableSource,
    /// Only emit these families (repeatable).
    #[arg(long = "family", conflicts_with = "popular")]
    pub families: Vec<String>,
    /// Only emit the built-in list of popular families.
    #[arg(long)]
    pub popular: bool,
}

impl TableArgs {
    fn selection(&self) -> FamilySelection {
        if self.popular {
            FamilySelection::Popular
        } else if !self.families.is_empty() {
            FamilySelection::Only(self.families.clone())
        } else {
            FamilySelection::All
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct NamingArgs {
    #[arg(long, default_value = DEFAULT_FAMILY_TYPE)]
    pub family_type: String,
    #[arg(long, default_value = DEFAULT_COMBINED_TYPE)]
    pub combined_type: String,
    #[arg(long, default_value = DEFAULT_COMPLEMENTARY_TYPE)]
    pub complementary_type: String,
    #[arg(long, default_value = DEFAULT_COMPLEMENTARY_MODULE)]
    pub complementary_module: String,
    #[arg(long, default_value = DEFAULT_TYPES_MODULE)]
    pub types_module: String,
    #[arg(long, default_value = DEFAULT_RETURN_TYPE)]
    pub return_type: String,
}

impl NamingArgs {
    fn emit_options(&self, install_hint: &str) -> EmitOptions {
        EmitOptions {
            family_type: self.family_type.clone(),
            combined_type: self.combined_type.clone(),
            complementary_type: self.complementary_type.clone(),
            complementary_module: self.complementary_module.clone(),
            types_module: self.types_module.clone(),
            return_type: self.return_type.clone(),
            install_hint: install_hint.to_owned(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the full declaration module.
    Generate {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        naming: NamingArgs,
        #[arg(short, long, default_value = fontdecl_core::config::DEFAULT_OUTPUT_FILENAME)]
        output: PathBuf,
        /// Leave out families with invalid axis metadata instead of failing.
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Write a placeholder module that exports every family.
    Stub {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        naming: NamingArgs,
        #[arg(short, long, default_value = fontdecl_core::config::DEFAULT_STUB_FILENAME)]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_INSTALL_HINT)]
        install_hint: String,
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Validate a table and list every problem without writing anything.
    Check {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Download a metadata table.
    Fetch {
        #[arg(long)]
        url: String,
        #[arg(short, long, default_value = DEFAULT_TABLE_FILENAME)]
        output: PathBuf,
    },
}

fn policy(skip_invalid: bool) -> InvalidFamilyPolicy {
    if skip_invalid { InvalidFamilyPolicy::Skip } else { InvalidFamilyPolicy::Abort }
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Generate { table, naming, output, skip_invalid } => {
                let options = GenerateOptions {
                    kind: ModuleKind::Declarations,
                    policy: policy(skip_invalid),
                    selection: table.selection(),
                    emit: naming.emit_options(DEFAULT_INSTALL_HINT),
                };
                let report = generate(&table.input, &output, &options)
                    .with_context(|| format!("Failed to generate {}", output.display()))?;
                print_generation(&report);
            }
            Commands::Stub { table, naming, output, install_hint, skip_invalid } => {
                let options = GenerateOptions {
                    kind: ModuleKind::Stub,
                    policy: policy(skip_invalid),
                    selection: table.selection(),
                    emit: naming.emit_options(&install_hint),
                };
                let report = generate(&table.input, &output, &options)
                    .with_context(|| format!("Failed to generate {}", output.display()))?;
                print_generation(&report);
            }
            Commands::Check { table } => {
                let options = GenerateOptions {
                    policy: InvalidFamilyPolicy::Skip,
                    selection: table.selection(),
                    ..GenerateOptions::default()
                };
                let report = check(&table.input, &options)
                    .with_context(|| format!("Failed to check {}", table.input))?;
                print_check(&report);
                if !report.skipped.is_empty() {
                    bail!("{} invalid families in {}", report.skipped.len(), table.input);
                }
            }
            Commands::Fetch { url, output } => {
                let count = fetch(&url, &output)
                    .with_context(|| format!("Failed to fetch metadata table from {url}"))?;
                println!("Saved {count} families to {}", output.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["fontdecl", "generate"]).unwrap();
        match cli.command {
            Commands::Generate { table, naming, output, skip_invalid } => {
                assert_eq!(table.input, TableSource::File(PathBuf::from("font-map.json")));
                assert_eq!(table.selection(), FamilySelection::All);
                assert_eq!(naming.emit_options(DEFAULT_INSTALL_HINT), EmitOptions::default());
                assert_eq!(output, PathBuf::from("fonts.ts"));
                assert!(!skip_invalid);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_with_families_from_url() {
        let cli = Cli::try_parse_from([
            "fontdecl",
            "generate",
            "--input",
            "https://example.com/font-map.json",
            "--family",
            "Roboto",
            "--family",
            "Inter",
            "--skip-invalid",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { table, skip_invalid, .. } => {
                assert!(matches!(table.input, TableSource::Url(_)));
                assert_eq!(
                    table.selection(),
                    FamilySelection::Only(vec!["Roboto".into(), "Inter".into()])
                );
                assert_eq!(policy(skip_invalid), InvalidFamilyPolicy::Skip);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_family_conflicts_with_popular() {
        let result =
            Cli::try_parse_from(["fontdecl", "stub", "--popular", "--family", "Roboto"]);
        assert!(result.is_err());
    }
}
