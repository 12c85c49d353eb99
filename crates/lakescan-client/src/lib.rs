//! # lakescan-client
//!
//! Dremio REST API client.
//!
//! [`DremioClient`] implements the [`CatalogSource`](lakescan_core::CatalogSource)
//! seam the traversal engine crawls through (catalog, grants, and lineage
//! reads) and additionally exposes the SQL job endpoints: submit a query,
//! poll it to completion, and page through its results.
//!
//! All requests carry a bearer token (Dremio personal access token). Non-2xx
//! responses and transport failures map to [`lakescan_core::Error`] and are
//! fatal to the caller; there is no retry policy.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod client;
pub mod jobs;

pub use client::{DremioClient, DremioConfig};
pub use jobs::{JobState, QueryData};
