//! Id-keyed lookup map collapsing lineage fan-in.
//!
//! The traversal represents a virtual dataset with N upstream parents as N
//! flat rows; this fold merges them back into one record per id with a
//! `parents` list in first-encountered order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::CatalogEntry;

/// Catalog lookup keyed by object id, preserving traversal order.
pub type CatalogLookup = IndexMap<String, LookupEntry>;

/// One catalog object with all of its lineage edges merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    /// Catalog id of the object.
    pub id: String,
    /// Path recorded on the first-encountered row for this id.
    pub object_path: Vec<String>,
    /// Object type recorded on the first-encountered row for this id.
    pub object_type: String,
    /// One element per flat row sharing this id, in traversal order.
    pub parents: Vec<ParentRef>,
}

/// One upstream edge of a catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    /// Catalog id of the upstream object, or blank.
    pub id: String,
    /// Path of the upstream object; empty when the row had no lineage edge.
    pub name: Vec<String>,
    /// `SOURCE` or the upstream dataset type, or blank.
    #[serde(rename = "type")]
    pub parent_type: String,
}

/// Folds the flat entry list into a [`CatalogLookup`].
///
/// Every row contributes exactly one `parents` element to its id's record;
/// the first row for an id sets `object_path` and `object_type` (all rows
/// sharing an id describe the same object, so later rows carry the same
/// values).
#[must_use]
pub fn build_catalog_lookup(entries: &[CatalogEntry]) -> CatalogLookup {
    let mut lookup = CatalogLookup::new();
    for entry in entries {
        let parent = ParentRef {
            id: entry.parent_id.clone(),
            name: entry.parent.clone(),
            parent_type: entry.parent_type.clone(),
        };
        lookup
            .entry(entry.id.clone())
            .or_insert_with(|| LookupEntry {
                id: entry.id.clone(),
                object_path: entry.object_path.clone(),
                object_type: entry.object_type.clone(),
                parents: Vec::new(),
            })
            .parents
            .push(parent);
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grant;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(ToString::to_string).collect()
    }

    fn vds_row(id: &str, parent_id: &str, parent_path: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            object_type: "VDS".to_string(),
            object_path: path(&["Analytics", "view"]),
            parent: path(parent_path),
            parent_id: parent_id.to_string(),
            parent_type: "VIRTUAL_DATASET".to_string(),
            grants: None,
        }
    }

    #[test]
    fn merges_fan_in_rows_into_one_record() {
        let entries = vec![
            vds_row("v1", "a", &["src", "t1"]),
            vds_row("v1", "b", &["src", "t2"]),
            vds_row("v1", "c", &["src", "t3"]),
        ];

        let lookup = build_catalog_lookup(&entries);
        assert_eq!(lookup.len(), 1);
        let record = &lookup["v1"];
        assert_eq!(record.object_path, path(&["Analytics", "view"]));
        let parent_ids: Vec<&str> =
            record.parents.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(parent_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn container_rows_contribute_blank_parent_elements() {
        let entries = vec![CatalogEntry::without_parent(
            "f1",
            "folder",
            path(&["src", "db"]),
            Some(vec![Grant {
                grantee_type: "USER".to_string(),
                name: "alice".to_string(),
                privileges: vec!["SELECT".to_string()],
            }]),
        )];

        let lookup = build_catalog_lookup(&entries);
        let record = &lookup["f1"];
        assert_eq!(record.parents.len(), 1);
        assert!(record.parents[0].id.is_empty());
        assert!(record.parents[0].name.is_empty());
    }

    #[test]
    fn is_idempotent_with_stable_order() {
        let entries = vec![
            vds_row("v1", "a", &["src", "t1"]),
            CatalogEntry::without_parent("f1", "folder", path(&["src", "db"]), None),
            vds_row("v1", "b", &["src", "t2"]),
        ];

        let first = build_catalog_lookup(&entries);
        let second = build_catalog_lookup(&entries);
        assert_eq!(first, second);

        let keys: Vec<&String> = first.keys().collect();
        assert_eq!(keys, vec!["v1", "f1"]);
    }
}
