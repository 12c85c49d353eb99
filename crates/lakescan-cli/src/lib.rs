//! # lakescan-cli
//!
//! Command-line interface for Lakescan.
//!
//! ## Commands
//!
//! - `lakescan crawl` - Walk the Dremio catalog and dump the flattened entries
//! - `lakescan grants` - Convert collected grants into SQL `GRANT` statements
//! - `lakescan lookup` - Build the id-keyed lineage lookup from a dump
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags for settings:
//!
//! - `DREMIO_ENDPOINT` - Dremio base URL
//!   (Software: `https://<host>[:<port>]`; Cloud: the project URL)
//! - `DREMIO_PAT` - Personal access token

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]

pub mod commands;

use clap::{Parser, Subcommand};

/// Lakescan - Dremio catalog crawler and grant exporter.
#[derive(Debug, Parser)]
#[command(name = "lakescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dremio base URL.
    #[arg(long, env = "DREMIO_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Personal access token.
    #[arg(long, env = "DREMIO_PAT")]
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value = "60")]
    pub timeout: u64,

    /// Skip TLS certificate verification.
    #[arg(long)]
    pub insecure: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            token: self.token.clone(),
            timeout: self.timeout,
            insecure: self.insecure,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Walk the catalog and dump the flattened entries to JSON.
    Crawl(commands::crawl::CrawlArgs),
    /// Convert a collected entries file into SQL GRANT statements.
    Grants(commands::grants::GrantsArgs),
    /// Build the id-keyed lineage lookup from an entries file.
    Lookup(commands::lookup::LookupArgs),
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dremio base URL.
    pub endpoint: Option<String>,
    /// Personal access token.
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout: u64,
    /// Skip TLS certificate verification.
    pub insecure: bool,
}
