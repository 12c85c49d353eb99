//! The catalog-service seam the traversal engine crawls through.
//!
//! [`CatalogSource`] abstracts the four read endpoints the walk needs, so the
//! engine can run against the real REST client or an in-memory fixture. The
//! response models deliberately mark every field the service is allowed to
//! omit as `Option` or defaulted: a missing key is a per-object condition the
//! traversal handles locally, never a decode failure that aborts the run.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::model::Grant;

/// Read access to a hierarchical catalog service.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the root catalog listing (top-level sources and spaces).
    async fn root_catalog(&self) -> Result<RootCatalog>;

    /// Fetches a single catalog object with its immediate children.
    async fn catalog_object(&self, id: &str) -> Result<CatalogObject>;

    /// Fetches the access grants on a catalog object.
    async fn object_grants(&self, id: &str) -> Result<GrantsResponse>;

    /// Fetches the lineage graph of a dataset.
    async fn dataset_graph(&self, id: &str) -> Result<GraphResponse>;
}

/// Root catalog listing.
///
/// `data` is required: a root response without it means the service is not
/// speaking the catalog API and the crawl cannot start.
#[derive(Debug, Deserialize)]
pub struct RootCatalog {
    /// Top-level catalog containers.
    pub data: Vec<CatalogChild>,
}

/// A catalog object fetched by id, with its immediate children.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogObject {
    /// Entity type, e.g. `source`, `space`, `folder`, `dataset`.
    pub entity_type: Option<String>,
    /// Object name; only present on root containers (sources and spaces),
    /// which omit `path`.
    pub name: Option<String>,
    /// Full path of the object.
    pub path: Option<Vec<String>>,
    /// Immediate children of this container.
    #[serde(default)]
    pub children: Vec<CatalogChild>,
}

/// A child reference inside a catalog listing or container response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogChild {
    /// Catalog id of the child.
    pub id: String,
    /// Full path of the child.
    #[serde(default)]
    pub path: Vec<String>,
    /// Coarse kind: `CONTAINER`, `DATASET`, or `FILE`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Container type for `CONTAINER` children: `SOURCE`, `SPACE`, `FOLDER`.
    pub container_type: Option<String>,
    /// Dataset type for `DATASET` children: `PROMOTED`, `DIRECT`, `VIRTUAL`.
    pub dataset_type: Option<String>,
}

/// Grants listing for a catalog object.
///
/// `grants` stays `None` when the key is absent (e.g. the token lacks the
/// privilege to read grants); the entry is still emitted, without grants.
#[derive(Debug, Default, Deserialize)]
pub struct GrantsResponse {
    /// Grants on the object, if readable.
    pub grants: Option<Vec<Grant>>,
}

/// Lineage graph for a virtual dataset.
#[derive(Debug, Default, Deserialize)]
pub struct GraphResponse {
    /// Immediate upstream datasets. `None` means the graph lookup failed
    /// (missing key), which is distinct from an empty parent list.
    pub parents: Option<Vec<GraphParent>>,
}

/// One upstream dataset in a lineage graph.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphParent {
    /// Catalog id of the parent dataset.
    #[serde(default)]
    pub id: String,
    /// Path of the parent dataset.
    #[serde(default)]
    pub path: Vec<String>,
    /// Dataset type of the parent, e.g. `VIRTUAL_DATASET`.
    #[serde(default)]
    pub dataset_type: String,
}
