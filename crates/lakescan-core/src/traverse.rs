//! Recursive depth-first catalog traversal.
//!
//! The walk visits one container at a time, strictly sequentially: fetch the
//! container, fetch its grants, then descend into each child in listing
//! order. Every missing-field condition is handled locally with a log line so
//! a single malformed or permission-restricted subtree never aborts the crawl
//! of the rest of the catalog. Only transport failures propagate.

use async_recursion::async_recursion;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::model::{CatalogEntry, OBJECT_TYPE_PDS, OBJECT_TYPE_VDS, PARENT_TYPE_SOURCE};
use crate::selector::{SourceSelector, SpaceSelector};
use crate::source::{CatalogObject, CatalogSource};

/// Crawls the whole catalog and returns the flattened entry list.
///
/// Top-level containers are dispatched by `containerType`: sources go through
/// the source selector, spaces through the space selector, and anything else
/// is skipped with an error log. Each accepted container is expanded
/// depth-first by [`collect_children`].
///
/// # Errors
///
/// Returns an error only for transport-level failures (connection errors,
/// non-2xx responses, undecodable bodies).
pub async fn collect_catalog<S>(
    source: &S,
    spaces: &SpaceSelector,
    sources: &SourceSelector,
) -> Result<Vec<CatalogEntry>>
where
    S: CatalogSource + ?Sized,
{
    let root = source.root_catalog().await?;
    let mut entries = Vec::new();

    for entry in &root.data {
        match entry.container_type.as_deref() {
            Some("SOURCE") => {
                if sources.matches(&entry.path) {
                    info!("Traversing SOURCE {:?} ...", entry.path);
                    entries.extend(
                        collect_children(source, &entry.id, Some(&entry.path), sources).await?,
                    );
                } else {
                    info!(
                        "Skipping SOURCE {:?} based on source selector settings.",
                        entry.path
                    );
                }
            }
            Some("SPACE") => {
                if spaces.matches(entry.path.first()) {
                    info!("Traversing SPACE {:?} ...", entry.path);
                    entries.extend(collect_children(source, &entry.id, None, sources).await?);
                } else {
                    info!(
                        "Skipping SPACE {:?} based on space selector settings.",
                        entry.path
                    );
                }
            }
            other => {
                error!("Unsupported container type {other:?}");
            }
        }
    }

    Ok(entries)
}

/// Expands one container: emits its self-describing entry, then walks its
/// children depth-first.
///
/// `data_source_path` is the path of the enclosing source, threaded through
/// folder recursion so physical datasets can record it as their synthetic
/// parent; it is `None` under spaces.
#[async_recursion]
async fn collect_children<S>(
    source: &S,
    catalog_id: &str,
    data_source_path: Option<&[String]>,
    sources: &SourceSelector,
) -> Result<Vec<CatalogEntry>>
where
    S: CatalogSource + ?Sized,
{
    let object = source.catalog_object(catalog_id).await?;
    let grants = source.object_grants(catalog_id).await?.grants;

    let mut entries = Vec::new();
    match self_entry(catalog_id, &object, grants) {
        Some(entry) => entries.push(entry),
        None => info!("Skipping catalog ID {catalog_id}"),
    }

    for child in &object.children {
        match (
            child.kind.as_deref(),
            child.container_type.as_deref(),
            child.dataset_type.as_deref(),
        ) {
            (Some("CONTAINER"), Some("FOLDER"), _) => {
                if sources.matches(&child.path) {
                    info!("Traversing FOLDER {:?} ...", child.path);
                    entries.extend(
                        collect_children(source, &child.id, data_source_path, sources).await?,
                    );
                } else {
                    debug!(
                        "Skipping FOLDER {:?} based on source selector settings.",
                        child.path
                    );
                }
            }
            (Some("DATASET"), _, Some("PROMOTED" | "DIRECT")) => {
                let grants = source.object_grants(&child.id).await?.grants;
                entries.push(CatalogEntry {
                    id: child.id.clone(),
                    object_type: OBJECT_TYPE_PDS.to_string(),
                    object_path: child.path.clone(),
                    parent: data_source_path.map(<[String]>::to_vec).unwrap_or_default(),
                    parent_id: String::new(),
                    parent_type: PARENT_TYPE_SOURCE.to_string(),
                    grants,
                });
            }
            (Some("DATASET"), _, Some("VIRTUAL")) => {
                let graph = source.dataset_graph(&child.id).await?;
                let grants = source.object_grants(&child.id).await?.grants;
                match graph.parents {
                    Some(parents) if !parents.is_empty() => {
                        for parent in parents {
                            entries.push(CatalogEntry {
                                id: child.id.clone(),
                                object_type: OBJECT_TYPE_VDS.to_string(),
                                object_path: child.path.clone(),
                                parent: parent.path,
                                parent_id: parent.id,
                                parent_type: parent.dataset_type,
                                grants: grants.clone(),
                            });
                        }
                    }
                    Some(_) => {
                        debug!(
                            "No parent objects for view {:?} could be found (likely due to RBAC)",
                            child.path
                        );
                        entries.push(CatalogEntry::without_parent(
                            child.id.clone(),
                            OBJECT_TYPE_VDS,
                            child.path.clone(),
                            grants,
                        ));
                    }
                    None => {
                        error!(
                            "Data lineage for view {:?} could not be retrieved",
                            child.path
                        );
                        entries.push(CatalogEntry::without_parent(
                            child.id.clone(),
                            OBJECT_TYPE_VDS,
                            child.path.clone(),
                            grants,
                        ));
                    }
                }
            }
            (Some("FILE"), _, _) => {
                debug!("Skipping unpromoted file {:?}", child.path);
            }
            (_, container_type, dataset_type) => {
                warn!("Unsupported container {container_type:?} or dataset {dataset_type:?}");
            }
        }
    }

    Ok(entries)
}

/// Builds the self-describing entry for a fetched container.
///
/// Root containers (`source`, `space`) omit `path` in the raw response, so it
/// is synthesized from `name`. Returns `None` when the response lacks the
/// fields needed to describe the object; the caller logs and moves on.
fn self_entry(
    catalog_id: &str,
    object: &CatalogObject,
    grants: Option<Vec<crate::model::Grant>>,
) -> Option<CatalogEntry> {
    let entity_type = object.entity_type.as_deref()?;
    let object_path = if matches!(entity_type, "source" | "space") {
        vec![object.name.clone()?]
    } else {
        object.path.clone().unwrap_or_default()
    };
    Some(CatalogEntry::without_parent(
        catalog_id,
        entity_type,
        object_path,
        grants,
    ))
}
