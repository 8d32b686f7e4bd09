//! The scan → parse → emit pipeline
//!
//! State flows through explicit return values: discovery hands the parser
//! an ordered package list, the parser hands the emitters an ordered
//! record list, and nothing is accumulated anywhere else.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::declare::render_declarations;
use crate::discovery::{DirListing, PackageDiscovery};
use crate::metadata::{FontRecord, MetadataParser};
use crate::output::{render_json, write_atomic};

/// Name of the per-family description file.
pub const DESCRIPTION_FILE: &str = "METADATA.pb";

/// Result of scanning the collection roots.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// One record per family with a valid description file, in
    /// enumeration order.
    pub records: Vec<FontRecord>,
    /// Family directories without a description file. Logged and excluded
    /// from both output artifacts.
    pub missing: Vec<String>,
}

/// Both rendered artifacts, ready to be written.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub json: String,
    pub declarations: String,
}

/// Destination paths for the two artifacts.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub declarations: PathBuf,
}

/// Enumerate the roots and parse every description file found.
///
/// Any fatal data error (missing name, missing variants, unreadable file
/// or root) aborts the whole scan.
pub fn scan(roots: &[PathBuf]) -> Result<ScanOutcome> {
    let parser = MetadataParser::new()?;
    let packages = DirListing::new(roots.iter().cloned()).discover()?;

    let mut outcome = ScanOutcome::default();
    for package in packages {
        let description = package.path().join(DESCRIPTION_FILE);
        if !description.exists() {
            log::info!("{}: no {DESCRIPTION_FILE}, skipping", package.family_dir);
            outcome.missing.push(package.family_dir);
            continue;
        }

        let text = fs::read_to_string(&description)
            .with_context(|| format!("reading {}", description.display()))?;
        let origin = format!("{}/{DESCRIPTION_FILE}", package.family_dir);
        outcome.records.push(parser.parse(&text, &origin)?);
    }

    Ok(outcome)
}

/// Render both artifacts from a record list.
pub fn render(records: &[FontRecord]) -> Result<Artifacts> {
    Ok(Artifacts {
        json: render_json(records)?,
        declarations: render_declarations(records),
    })
}

/// Full pipeline: scan the roots, render both artifacts, then write them
/// atomically. Rendering happens entirely before the first write, so a
/// fatal error never disturbs existing output files.
pub fn generate(roots: &[PathBuf], paths: &OutputPaths) -> Result<ScanOutcome> {
    let outcome = scan(roots)?;
    let artifacts = render(&outcome.records)?;

    write_atomic(&paths.json, &artifacts.json)?;
    write_atomic(&paths.declarations, &artifacts.declarations)?;

    log::info!(
        "wrote {} font records, skipped {} directories without metadata",
        outcome.records.len(),
        outcome.missing.len()
    );
    Ok(outcome)
}
