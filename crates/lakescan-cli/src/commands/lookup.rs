//! Lookup command - collapse lineage fan-in into an id-keyed map.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use lakescan_core::{build_catalog_lookup, CatalogEntry};

/// Arguments for the lookup command.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Entries file produced by `lakescan crawl`.
    #[arg(long, short = 'i', default_value = "dremio_catalog_entries.json")]
    pub input: PathBuf,

    /// Output file for the id-keyed lookup map.
    #[arg(long, short = 'o', default_value = "dremio_catalog_lookup.json")]
    pub output: PathBuf,
}

/// Execute the lookup command.
///
/// # Errors
///
/// Returns an error if the entries file cannot be read or parsed, or the
/// output file cannot be written.
pub fn execute(args: &LookupArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&content).context("Failed to parse catalog entries")?;

    let lookup = build_catalog_lookup(&entries);

    let json = serde_json::to_string(&lookup).context("Failed to serialize catalog lookup")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(
        "Created {} with {} objects",
        args.output.display(),
        lookup.len()
    );

    Ok(())
}
