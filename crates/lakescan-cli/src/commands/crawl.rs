//! Crawl command - walk the catalog and dump the flattened entries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use lakescan_client::{DremioClient, DremioConfig};
use lakescan_core::{collect_catalog, SourceSelector, SpaceSelector};

use crate::Config;

/// Arguments for the crawl command.
#[derive(Debug, Args)]
pub struct CrawlArgs {
    /// Space names to include (all spaces when omitted).
    #[arg(long = "space", value_name = "NAME")]
    pub spaces: Vec<String>,

    /// Source path prefixes to include, slash-separated
    /// (e.g. `my-s3-bucket/folder1`); everything when omitted.
    #[arg(long = "source", value_name = "PATH")]
    pub sources: Vec<String>,

    /// Output file for the collected entries.
    #[arg(long, short = 'o', default_value = "dremio_catalog_entries.json")]
    pub output: PathBuf,
}

/// Execute the crawl command.
///
/// # Errors
///
/// Returns an error if the endpoint or token is missing, a request fails at
/// the transport level, or the output file cannot be written.
pub async fn execute(args: CrawlArgs, config: &Config) -> Result<()> {
    let endpoint = config
        .endpoint
        .as_ref()
        .context("Dremio endpoint is required. Set DREMIO_ENDPOINT or use --endpoint")?;
    let token = config
        .token
        .as_ref()
        .context("Personal access token is required. Set DREMIO_PAT or use --token")?;

    let client = DremioClient::new(
        DremioConfig::new(endpoint, token)
            .with_timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure),
    )?;

    let spaces = SpaceSelector::new(args.spaces.iter().cloned());
    let sources = source_selector(&args.sources);

    info!("Retrieving catalog from {} ...", client.endpoint());
    let entries = collect_catalog(&client, &spaces, &sources).await?;

    let json = serde_json::to_string(&entries).context("Failed to serialize catalog entries")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(
        "Created {} with {} entries",
        args.output.display(),
        entries.len()
    );

    Ok(())
}

/// Builds the source selector from slash-separated path prefixes, falling
/// back to the match-everything sentinel when none are configured.
fn source_selector(prefixes: &[String]) -> SourceSelector {
    if prefixes.is_empty() {
        return SourceSelector::match_all();
    }
    SourceSelector::new(
        prefixes
            .iter()
            .map(|p| p.split('/').map(str::to_string).collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selector_parsing() {
        let selector = source_selector(&["my-s3-bucket/folder1".to_string()]);
        assert!(selector.matches(&["my-s3-bucket".to_string()]));
        assert!(selector.matches(&[
            "my-s3-bucket".to_string(),
            "folder1".to_string(),
            "t".to_string()
        ]));
        assert!(!selector.matches(&["other".to_string()]));
    }

    #[test]
    fn test_empty_sources_match_everything() {
        let selector = source_selector(&[]);
        assert!(selector.matches(&["anything".to_string()]));
    }

    #[test]
    fn test_crawl_args_parsing() {
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            args: CrawlArgs,
        }

        let cli = TestCli::parse_from([
            "test",
            "--space",
            "Finance",
            "--space",
            "Marketing",
            "--source",
            "glue/sales",
            "-o",
            "out.json",
        ]);
        assert_eq!(cli.args.spaces, vec!["Finance", "Marketing"]);
        assert_eq!(cli.args.sources, vec!["glue/sales"]);
        assert_eq!(cli.args.output, PathBuf::from("out.json"));
    }
}
