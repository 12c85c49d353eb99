//! # lakescan-core
//!
//! Catalog data model and crawl logic for Lakescan.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Data Model**: [`CatalogEntry`] rows and the id-keyed [`CatalogLookup`]
//! - **Selector Filters**: path-prefix and space-name predicates that bound a crawl
//! - **Traversal Engine**: the recursive depth-first walk over a [`CatalogSource`]
//! - **Grant Formatter**: SQL `GRANT` statement generation from collected grants
//! - **Error Types**: shared error definitions and result types
//!
//! The HTTP client implementing [`CatalogSource`] lives in `lakescan-client`;
//! this split keeps the traversal engine testable against in-memory fixtures.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grants;
pub mod lookup;
pub mod model;
pub mod selector;
pub mod source;
pub mod traverse;

pub use error::{Error, Result};
pub use grants::{format_grants, GrantRecord};
pub use lookup::{build_catalog_lookup, CatalogLookup, LookupEntry, ParentRef};
pub use model::{CatalogEntry, Grant};
pub use selector::{SourceSelector, SpaceSelector};
pub use source::CatalogSource;
pub use traverse::collect_catalog;
