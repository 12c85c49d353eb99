//! Grants command - render collected grants as SQL GRANT statements.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use lakescan_core::{format_grants, CatalogEntry};

/// Arguments for the grants command.
#[derive(Debug, Args)]
pub struct GrantsArgs {
    /// Entries file produced by `lakescan crawl`.
    #[arg(long, short = 'i', default_value = "dremio_catalog_entries.json")]
    pub input: PathBuf,

    /// Output file for the SQL script.
    #[arg(long, default_value = "grants.sql")]
    pub sql_output: PathBuf,

    /// Output file for the flat grant records.
    #[arg(long, default_value = "grants.json")]
    pub json_output: PathBuf,
}

/// Execute the grants command.
///
/// # Errors
///
/// Returns an error if the entries file cannot be read or parsed, or an
/// output file cannot be written.
pub fn execute(args: &GrantsArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&content).context("Failed to parse catalog entries")?;

    let (records, script) = format_grants(&entries);

    std::fs::write(&args.sql_output, &script)
        .with_context(|| format!("Failed to write {}", args.sql_output.display()))?;
    let json = serde_json::to_string(&records).context("Failed to serialize grant records")?;
    std::fs::write(&args.json_output, json)
        .with_context(|| format!("Failed to write {}", args.json_output.display()))?;

    info!(
        "Created {} and {} with {} grants",
        args.sql_output.display(),
        args.json_output.display(),
        records.len()
    );

    Ok(())
}
