//! CLI command implementations.

pub mod crawl;
pub mod grants;
pub mod lookup;
