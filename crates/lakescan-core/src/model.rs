//! Flattened catalog records produced by a crawl.

use serde::{Deserialize, Serialize};

/// Object type label for physical datasets.
pub const OBJECT_TYPE_PDS: &str = "PDS";

/// Object type label for virtual datasets.
pub const OBJECT_TYPE_VDS: &str = "VDS";

/// Parent type recorded on the synthetic source edge of a physical dataset.
pub const PARENT_TYPE_SOURCE: &str = "SOURCE";

/// One row per catalog object visited during a crawl.
///
/// A virtual dataset with N upstream parents yields N rows sharing the same
/// `id` and differing only in the `parent*` fields; the flat list is never
/// deduplicated. Fan-in lineage is collapsed later by
/// [`build_catalog_lookup`](crate::lookup::build_catalog_lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Opaque catalog identifier assigned by the service.
    pub id: String,
    /// Container entity type (`source`, `space`, `folder`) or derived
    /// dataset classification (`PDS`, `VDS`).
    pub object_type: String,
    /// Ordered path segments, e.g. `["mySource", "db", "table"]`.
    pub object_path: Vec<String>,
    /// Path of one upstream lineage edge; empty when the object has none.
    pub parent: Vec<String>,
    /// Catalog id of the upstream object, or blank.
    pub parent_id: String,
    /// `SOURCE` or the parent's dataset type, or blank.
    pub parent_type: String,
    /// Access grants on this object, or `None` if they could not be
    /// retrieved.
    pub grants: Option<Vec<Grant>>,
}

impl CatalogEntry {
    /// Creates an entry with no lineage edge.
    #[must_use]
    pub fn without_parent(
        id: impl Into<String>,
        object_type: impl Into<String>,
        object_path: Vec<String>,
        grants: Option<Vec<Grant>>,
    ) -> Self {
        Self {
            id: id.into(),
            object_type: object_type.into(),
            object_path,
            parent: Vec::new(),
            parent_id: String::new(),
            parent_type: String::new(),
            grants,
        }
    }
}

/// A single access-control grant on a catalog object.
///
/// Field names keep the service's camelCase keys so collected entries
/// round-trip unchanged through the JSON dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    /// Kind of grantee, e.g. `USER` or `ROLE`.
    pub grantee_type: String,
    /// Grantee identifier (user or role name).
    pub name: String,
    /// Privilege strings as reported by the service, e.g. `SELECT`.
    #[serde(default)]
    pub privileges: Vec<String>,
}
