//! gftype CLI

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};

use gftype_core::pipeline::{generate, OutputPaths, ScanOutcome};

/// Default collection root, matching the conventional checkout layout
/// where gftype runs next to a google-fonts clone.
const DEFAULT_ROOT: &str = "../google-fonts/ofl";

/// CLI entrypoint for gftype.
#[derive(Debug, Parser)]
#[command(
    name = "gftype",
    about = "Scan Google Fonts metadata, emit a JSON dump and TypeScript declarations"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan collection roots and generate both artifacts
    Gen(GenArgs),
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Collection roots containing one family directory per font
    #[arg(value_hint = ValueHint::DirPath)]
    roots: Vec<PathBuf>,

    /// Directory the artifacts are written into (created if absent)
    #[arg(long = "out-dir", default_value = "generated", value_hint = ValueHint::DirPath)]
    out_dir: PathBuf,

    /// File name of the JSON dump
    #[arg(long = "json-name", default_value = "FontsWithMetaData.json")]
    json_name: String,

    /// File name of the TypeScript declaration module
    #[arg(long = "decl-name", default_value = "gFontInterfaces.ts")]
    decl_name: String,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Gen(args) => run_gen(args).map(|_| ()),
    }
}

fn run_gen(args: GenArgs) -> Result<ScanOutcome> {
    let roots = effective_roots(&args.roots);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;
    let paths = OutputPaths {
        json: args.out_dir.join(&args.json_name),
        declarations: args.out_dir.join(&args.decl_name),
    };

    let outcome = generate(&roots, &paths)?;
    log::info!(
        "{} -> {} records, {} families without metadata",
        args.out_dir.display(),
        outcome.records.len(),
        outcome.missing.len()
    );
    Ok(outcome)
}

fn effective_roots(raw: &[PathBuf]) -> Vec<PathBuf> {
    if raw.is_empty() {
        vec![PathBuf::from(DEFAULT_ROOT)]
    } else {
        raw.to_vec()
    }
}
